//! Per-tick aggregate statistics and the reason a run ended.

use std::fmt;

use epi_core::{AgentState, Tick};

/// Population snapshot taken once at construction and once per tick, after
/// infection propagation and before agents advance.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickStats {
    pub tick:   Tick,
    /// Agent count per state, indexed by `AgentState::index()`.
    pub counts: [usize; AgentState::COUNT],
    pub total:  usize,
    pub r0:     f64,
}

impl TickStats {
    #[inline]
    pub fn count(&self, state: AgentState) -> usize {
        self.counts[state.index()]
    }

    /// `count(state) / total`, or `0.0` with no agents.
    pub fn fraction(&self, state: AgentState) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(state) as f64 / self.total as f64
        }
    }

    /// All six fractions in `AgentState::ALL` order.
    pub fn fractions(&self) -> [f64; AgentState::COUNT] {
        AgentState::ALL.map(|s| self.fraction(s))
    }
}

/// Which termination condition switched the model to STOPPED.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The clock reached `max_timesteps`.
    MaxTimesteps,
    /// No SUSCEPTIBLE agent is left.
    SusceptibleExhausted,
    /// The SUSCEPTIBLE count did not change over the patience window.
    Plateau,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::MaxTimesteps => "max timesteps reached",
            StopReason::SusceptibleExhausted => "susceptible population exhausted",
            StopReason::Plateau => "susceptible population plateaued",
        })
    }
}
