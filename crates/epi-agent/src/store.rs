//! `AgentStore` — arena of every agent, indexed by `AgentId`.
//!
//! Agents are appended once during model initialization and never removed,
//! so `AgentId(i)` is always the `i`-th element.

use epi_core::{AgentId, AgentState, SimRng};
use epi_grid::{Grid, GridResult};

use crate::Agent;

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { agents: Vec::with_capacity(capacity) }
    }

    /// Create the next agent as SUSCEPTIBLE on a random empty cell of `grid`.
    ///
    /// # Errors
    ///
    /// [`GridError::GridFull`](epi_grid::GridError::GridFull) if the grid has
    /// no empty cell; the store is left unchanged.
    pub fn spawn(&mut self, grid: &mut Grid, rng: &mut SimRng) -> GridResult<AgentId> {
        let id = AgentId(self.agents.len() as u32);
        let pos = grid.place_random_empty(id, AgentState::Susceptible, rng)?;
        self.agents.push(Agent::new(id, pos));
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    /// Iterator over all agents in ascending id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }
}
