//! `DiseasePlan` — the fixed four-event SEIR timeline of one infection.

use epi_core::{AgentState, Tick};

use crate::{AgentEvent, Progression};

/// Exactly four events in causal order:
/// `S→E`, `E→I`, `I→Symptomatic`, `Symptomatic→R`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseasePlan {
    events: [AgentEvent; 4],
}

impl DiseasePlan {
    /// Lay out `progression` starting at `base`.
    pub fn new(progression: Progression, base: Tick) -> Self {
        use AgentState::*;
        Self {
            events: [
                AgentEvent::new(Susceptible, Exposed, base),
                AgentEvent::new(Exposed, Infectious, base + progression.latent),
                AgentEvent::new(Infectious, Symptomatic, base + progression.incubation),
                AgentEvent::new(Symptomatic, Recovered, base + progression.recovery),
            ],
        }
    }

    pub fn events(&self) -> &[AgentEvent; 4] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgentEvent> {
        self.events.iter()
    }

    /// Tick of the initial `S→E` transition.
    pub fn start(&self) -> Tick {
        self.events[0].scheduled_at
    }

    /// Tick of the final `Symptomatic→R` transition.
    pub fn end(&self) -> Tick {
        self.events[3].scheduled_at
    }
}

impl IntoIterator for DiseasePlan {
    type Item = AgentEvent;
    type IntoIter = std::array::IntoIter<AgentEvent, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiseasePlan {
    type Item = &'a AgentEvent;
    type IntoIter = std::slice::Iter<'a, AgentEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
