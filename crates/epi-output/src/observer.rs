//! `StatsObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use epi_core::{Coord, Tick};
use epi_sim::{SimObserver, StopReason, TickStats, VaccinationResponse};

use crate::row::{TickStatsRow, VaccinationRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every tick's statistics and every observed
/// vaccination attempt to an [`OutputWriter`].
///
/// `Model::run` only reports ticks it processes, so the statistics collected
/// at construction have to be passed to [`record`](Self::record) by hand.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  Check them with [`take_error`](Self::take_error)
/// once the run is over.
pub struct StatsObserver<W: OutputWriter> {
    writer:       W,
    rows_written: usize,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> StatsObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows_written: 0, last_error: None }
    }

    /// Write one statistics entry outside of a tick callback.
    pub fn record(&mut self, stats: &TickStats) {
        let result = self.writer.write_tick_stats(&TickStatsRow::from(stats));
        if result.is_ok() {
            self.rows_written += 1;
        }
        self.store_err(result);
    }

    /// Number of statistics rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for StatsObserver<W> {
    fn on_tick_end(&mut self, stats: &TickStats) {
        self.record(stats);
    }

    fn on_vaccination(
        &mut self,
        tick:     Tick,
        coord:    Coord,
        success:  bool,
        response: VaccinationResponse,
    ) {
        let row = VaccinationRow::new(tick, coord, success, response);
        let result = self.writer.write_vaccination(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _last: &TickStats, _reason: Option<StopReason>) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
