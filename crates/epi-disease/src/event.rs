//! `AgentEvent` — one pending state transition on an agent's schedule.

use epi_core::{AgentState, Tick};

/// A transition from `previous_state` to `new_state`, due at `scheduled_at`.
///
/// Events are created by [`DiseasePlanner`](crate::DiseasePlanner) and owned
/// by the agent they are scheduled on.  `executed` flips once, when the agent
/// applies the transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentEvent {
    pub previous_state: AgentState,
    pub new_state:      AgentState,
    pub scheduled_at:   Tick,
    pub executed:       bool,
}

impl AgentEvent {
    pub fn new(previous_state: AgentState, new_state: AgentState, scheduled_at: Tick) -> Self {
        Self { previous_state, new_state, scheduled_at, executed: false }
    }

    #[inline]
    pub fn is_due(&self, now: Tick) -> bool {
        !self.executed && self.scheduled_at == now
    }

    #[inline]
    pub fn mark_executed(&mut self) {
        self.executed = true;
    }
}
