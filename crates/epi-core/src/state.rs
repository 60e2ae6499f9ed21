//! Disease compartments shared across every `epi-*` crate.
//!
//! The discriminant doubles as the index of the state's layer in the grid
//! observation tensor, so the variant order is part of the observation
//! layout and must not change.

/// The compartment an agent currently occupies.
///
/// The variants are mutually exclusive.  They are *not* ordered by the
/// derived `Ord` in any epidemiological sense; progression order is defined
/// solely by the disease plan (S → E → I → Symptomatic → R).  `Vaccinated`
/// is only reachable from `Susceptible` by an external command.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AgentState {
    #[default]
    Susceptible = 0,
    Exposed = 1,
    Infectious = 2,
    Symptomatic = 3,
    Recovered = 4,
    Vaccinated = 5,
}

impl AgentState {
    /// Number of distinct states (the depth of the observation tensor).
    pub const COUNT: usize = 6;

    /// All states in layer order.
    pub const ALL: [AgentState; AgentState::COUNT] = [
        AgentState::Susceptible,
        AgentState::Exposed,
        AgentState::Infectious,
        AgentState::Symptomatic,
        AgentState::Recovered,
        AgentState::Vaccinated,
    ];

    /// Layer index of this state in the observation tensor.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the states that can transmit the disease to neighbors.
    #[inline]
    pub fn is_infectious(self) -> bool {
        matches!(self, AgentState::Infectious | AgentState::Symptomatic)
    }

    /// Human-readable label, used as the CSV column name.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Susceptible => "susceptible",
            AgentState::Exposed     => "exposed",
            AgentState::Infectious  => "infectious",
            AgentState::Symptomatic => "symptomatic",
            AgentState::Recovered   => "recovered",
            AgentState::Vaccinated  => "vaccinated",
        }
    }
}

impl std::fmt::Display for AgentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
