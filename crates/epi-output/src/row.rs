//! Plain data row types written by output backends.

use epi_core::{AgentState, Coord, Tick};
use epi_sim::{TickStats, VaccinationResponse};

/// Population fractions and R0 for one collected statistics entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStatsRow {
    pub tick:        u64,
    pub susceptible: f64,
    pub exposed:     f64,
    pub infectious:  f64,
    pub symptomatic: f64,
    pub recovered:   f64,
    pub vaccinated:  f64,
    pub r0:          f64,
}

impl From<&TickStats> for TickStatsRow {
    fn from(stats: &TickStats) -> Self {
        Self {
            tick:        stats.tick.0,
            susceptible: stats.fraction(AgentState::Susceptible),
            exposed:     stats.fraction(AgentState::Exposed),
            infectious:  stats.fraction(AgentState::Infectious),
            symptomatic: stats.fraction(AgentState::Symptomatic),
            recovered:   stats.fraction(AgentState::Recovered),
            vaccinated:  stats.fraction(AgentState::Vaccinated),
            r0:          stats.r0,
        }
    }
}

/// One vaccination attempt, successful or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaccinationRow {
    pub tick:     u64,
    /// Coordinates as requested, before any wrapping.
    pub x:        i32,
    pub y:        i32,
    pub success:  bool,
    pub response: VaccinationResponse,
}

impl VaccinationRow {
    pub fn new(tick: Tick, coord: Coord, success: bool, response: VaccinationResponse) -> Self {
        Self { tick: tick.0, x: coord.x, y: coord.y, success, response }
    }
}
