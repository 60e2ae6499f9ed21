//! `ContactNetwork` — record of who infected whom.
//!
//! Only successful transmissions are recorded, and the network never
//! shrinks.  R0 is estimated as the mean number of secondary infections
//! over every agent that has infected at least one other.

use epi_core::AgentId;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Clone, Debug, Default)]
pub struct ContactNetwork {
    infections: FxHashMap<AgentId, FxHashSet<AgentId>>,
    counts:     FxHashMap<AgentId, usize>,
    total:      usize,
}

impl ContactNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `infector` transmitted to `target`.
    pub fn register_infection(&mut self, infector: AgentId, target: AgentId) {
        self.infections.entry(infector).or_default().insert(target);
        *self.counts.entry(infector).or_insert(0) += 1;
        self.total += 1;
    }

    /// Mean secondary infections per infector, `0.0` before any transmission.
    pub fn r0(&self) -> f64 {
        match self.counts.len() {
            0 => 0.0,
            n => self.total as f64 / n as f64,
        }
    }

    /// Agents infected by `infector`, ascending.
    pub fn infected_by(&self, infector: AgentId) -> Vec<AgentId> {
        let mut out: Vec<AgentId> = self
            .infections
            .get(&infector)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        out.sort_unstable();
        out
    }

    /// Number of agents that have infected at least one other.
    pub fn infector_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total_infections(&self) -> usize {
        self.total
    }
}
