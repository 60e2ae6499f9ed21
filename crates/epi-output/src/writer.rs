//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, TickStatsRow, VaccinationRow};

/// Sink for statistics and vaccination rows.
///
/// Errors are returned to the caller; [`StatsObserver`](crate::StatsObserver)
/// stores them because observer callbacks cannot fail.
pub trait OutputWriter {
    /// Write one statistics row.
    fn write_tick_stats(&mut self, row: &TickStatsRow) -> OutputResult<()>;

    /// Write one vaccination attempt.
    fn write_vaccination(&mut self, row: &VaccinationRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
