//! `StateRegistry` — agents partitioned by current state.
//!
//! # Invariant
//!
//! Every registered agent is in exactly one of the six buckets, and that
//! bucket matches the agent's `state`.  Callers keep this true by calling
//! [`StateRegistry::update_bucket`] exactly once after every state change.
//!
//! Buckets are `BTreeSet`s so that `agents_by_state` yields ascending ids;
//! infection propagation relies on that order for its tie-break.

use std::collections::BTreeSet;

use epi_core::{AgentId, AgentState, EpiError, EpiResult, SimRng};

#[derive(Clone, Debug, Default)]
pub struct StateRegistry {
    buckets: [BTreeSet<AgentId>; AgentState::COUNT],
    members: BTreeSet<AgentId>,
}

impl StateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `agent` in the bucket for `state`.
    ///
    /// # Panics
    ///
    /// Panics if `agent` is already registered.
    pub fn add(&mut self, agent: AgentId, state: AgentState) {
        assert!(self.members.insert(agent), "{agent} registered twice");
        self.buckets[state.index()].insert(agent);
    }

    /// Unregister `agent`, which must currently be filed under `state`.
    ///
    /// # Errors
    ///
    /// [`EpiError::NotInBucket`] if it is not; nothing is changed.
    pub fn remove(&mut self, agent: AgentId, state: AgentState) -> EpiResult<()> {
        if !self.buckets[state.index()].remove(&agent) {
            return Err(EpiError::NotInBucket { agent, state });
        }
        self.members.remove(&agent);
        Ok(())
    }

    /// Move `agent` from the `previous` bucket to the `current` one.
    ///
    /// # Panics
    ///
    /// Panics if `agent` is not in the `previous` bucket, which means an
    /// earlier state change was never reported.
    pub fn update_bucket(&mut self, agent: AgentId, previous: AgentState, current: AgentState) {
        let was_there = self.buckets[previous.index()].remove(&agent);
        assert!(was_there, "{agent} missing from the {previous} bucket");
        self.buckets[current.index()].insert(agent);
    }

    /// Agents currently in `state`, ascending by id.
    pub fn agents_by_state(&self, state: AgentState) -> impl Iterator<Item = AgentId> + '_ {
        self.buckets[state.index()].iter().copied()
    }

    pub fn contains(&self, agent: AgentId, state: AgentState) -> bool {
        self.buckets[state.index()].contains(&agent)
    }

    #[inline]
    pub fn count(&self, state: AgentState) -> usize {
        self.buckets[state.index()].len()
    }

    /// Per-state counts indexed by `AgentState::index()`.
    pub fn counts(&self) -> [usize; AgentState::COUNT] {
        std::array::from_fn(|i| self.buckets[i].len())
    }

    /// `count(state) / total()`, or `0.0` for an empty registry.
    pub fn fraction(&self, state: AgentState) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(state) as f64 / total as f64,
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.members.len()
    }

    /// Every registered agent in a fresh random order.
    ///
    /// Starts from ascending ids so the result depends only on the RNG state.
    pub fn activation_order(&self, rng: &mut SimRng) -> Vec<AgentId> {
        let mut order: Vec<AgentId> = self.members.iter().copied().collect();
        rng.shuffle(&mut order);
        order
    }
}
