//! Simulation observer trait for progress reporting and data collection.

use epi_core::{Coord, Tick};

use crate::{StopReason, TickStats, VaccinationResponse};

/// Callbacks invoked by [`Model::run`][crate::Model::run] and
/// [`Model::vaccinate_observed`][crate::Model::vaccinate_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, stats: &TickStats) {
///         if stats.tick.0 % self.interval == 0 {
///             println!("{}: {:.1}% susceptible", stats.tick,
///                      100.0 * stats.fraction(AgentState::Susceptible));
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each tick with the statistics collected during it.
    fn on_tick_end(&mut self, _stats: &TickStats) {}

    /// Called after every vaccination attempt made through
    /// `vaccinate_observed`, including misses.
    fn on_vaccination(
        &mut self,
        _tick:     Tick,
        _coord:    Coord,
        _success:  bool,
        _response: VaccinationResponse,
    ) {}

    /// Called once when `run` returns, with the last collected statistics.
    fn on_sim_end(&mut self, _last: &TickStats, _reason: Option<StopReason>) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
