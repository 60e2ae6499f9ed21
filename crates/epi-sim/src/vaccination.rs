//! Outcome codes of the vaccination command.

use std::fmt;

use epi_core::AgentState;

/// Why a vaccination attempt did or did not take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum VaccinationResponse {
    VaccinationSuccess,
    CellEmpty,
    AgentExposed,
    AgentInfectious,
    AgentSymptomatic,
    AgentRecovered,
    AgentVaccinated,
    AgentVaccinesExhausted,
}

impl VaccinationResponse {
    pub const ALL: [VaccinationResponse; 8] = [
        Self::VaccinationSuccess,
        Self::CellEmpty,
        Self::AgentExposed,
        Self::AgentInfectious,
        Self::AgentSymptomatic,
        Self::AgentRecovered,
        Self::AgentVaccinated,
        Self::AgentVaccinesExhausted,
    ];

    #[inline]
    pub fn is_success(self) -> bool {
        self == Self::VaccinationSuccess
    }

    /// The miss code for an occupant that is already in `state`.
    /// `None` for SUSCEPTIBLE, which can be vaccinated.
    pub fn for_occupant(state: AgentState) -> Option<Self> {
        match state {
            AgentState::Susceptible => None,
            AgentState::Exposed => Some(Self::AgentExposed),
            AgentState::Infectious => Some(Self::AgentInfectious),
            AgentState::Symptomatic => Some(Self::AgentSymptomatic),
            AgentState::Recovered => Some(Self::AgentRecovered),
            AgentState::Vaccinated => Some(Self::AgentVaccinated),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VaccinationSuccess => "VACCINATION_SUCCESS",
            Self::CellEmpty => "CELL_EMPTY",
            Self::AgentExposed => "AGENT_EXPOSED",
            Self::AgentInfectious => "AGENT_INFECTIOUS",
            Self::AgentSymptomatic => "AGENT_SYMPTOMATIC",
            Self::AgentRecovered => "AGENT_RECOVERED",
            Self::AgentVaccinated => "AGENT_VACCINATED",
            Self::AgentVaccinesExhausted => "AGENT_VACCINES_EXHAUSTED",
        }
    }
}

impl fmt::Display for VaccinationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
