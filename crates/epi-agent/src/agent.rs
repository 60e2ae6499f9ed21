//! A single grid-dwelling agent and its disease schedule.
//!
//! # Lifecycle
//!
//! ```text
//! SUSCEPTIBLE ─▶ EXPOSED ─▶ INFECTIOUS ─▶ SYMPTOMATIC ─▶ RECOVERED
//!      │                 (disease plan, at most once)
//!      └──────▶ VACCINATED   (external command only)
//! ```
//!
//! The schedule maps an absolute tick to the event due at that tick.  Once a
//! plan has been attached the agent is *schedule-locked*: further infection
//! attempts are silent no-ops, so each agent catches the disease at most once.

use std::collections::BTreeMap;

use epi_core::{AgentId, AgentState, Coord, SimRng, Tick};
use epi_disease::{AgentEvent, DiseasePlanner};
use epi_grid::{Grid, GridResult};

/// A state change produced by an agent operation, to be mirrored into the
/// registry and the observation tensor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateTransition {
    pub agent:    AgentId,
    pub position: Coord,
    pub previous: AgentState,
    pub current:  AgentState,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    id:              AgentId,
    pos:             Coord,
    state:           AgentState,
    schedule:        BTreeMap<Tick, AgentEvent>,
    schedule_locked: bool,
}

impl Agent {
    /// A fresh SUSCEPTIBLE agent at `pos` with an empty schedule.
    pub fn new(id: AgentId, pos: Coord) -> Self {
        Self {
            id,
            pos,
            state: AgentState::Susceptible,
            schedule: BTreeMap::new(),
            schedule_locked: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> Coord {
        self.pos
    }

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    #[inline]
    pub fn is_schedule_locked(&self) -> bool {
        self.schedule_locked
    }

    /// The full schedule, executed events included, in tick order.
    pub fn schedule(&self) -> &BTreeMap<Tick, AgentEvent> {
        &self.schedule
    }

    /// Events not yet executed, in tick order.
    pub fn pending_events(&self) -> impl Iterator<Item = &AgentEvent> + '_ {
        self.schedule.values().filter(|e| !e.executed)
    }

    // ── Disease ───────────────────────────────────────────────────────────

    /// Attempt to infect this agent with probability `prob`.
    ///
    /// A locked agent returns `false` without drawing.  Otherwise one
    /// Bernoulli draw decides; on success a plan based at `now` is sampled
    /// from `planner`, every event is keyed by its tick, and the schedule is
    /// locked.
    ///
    /// # Panics
    ///
    /// Panics if two events land on the same tick.
    pub fn trigger_infection(
        &mut self,
        prob:    f64,
        planner: &DiseasePlanner,
        now:     Tick,
        rng:     &mut SimRng,
    ) -> bool {
        if self.schedule_locked || !rng.chance(prob) {
            return false;
        }
        for event in planner.build_plan(now, rng) {
            let at = event.scheduled_at;
            let clash = self.schedule.insert(at, event);
            assert!(
                clash.is_none(),
                "{} already has an event scheduled at {at}",
                self.id
            );
        }
        self.schedule_locked = true;
        true
    }

    /// Execute the event due at `now`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the agent's current state differs from the event's
    /// `previous_state`; that means the schedule has been corrupted.
    pub fn process_due_events(&mut self, now: Tick) -> Option<StateTransition> {
        let event = self.schedule.get_mut(&now).filter(|e| !e.executed)?;
        assert_eq!(
            self.state, event.previous_state,
            "{} is {} but its event at {now} expects {}",
            self.id, self.state, event.previous_state
        );
        let new_state = event.new_state;
        event.mark_executed();
        Some(self.set_state(new_state))
    }

    /// Overwrite the state directly (vaccination, seeding).
    pub fn set_state(&mut self, new_state: AgentState) -> StateTransition {
        let previous = std::mem::replace(&mut self.state, new_state);
        StateTransition { agent: self.id, position: self.pos, previous, current: new_state }
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// With probability `prob`, step to a uniformly chosen empty Moore
    /// neighbor.  Returns `(from, to)` when the agent moved.
    ///
    /// Always consumes one Bernoulli draw; a second draw picks the cell
    /// only when the agent decided to move and a free neighbor exists.
    pub fn random_move(
        &mut self,
        prob: f64,
        grid: &mut Grid,
        rng:  &mut SimRng,
    ) -> GridResult<Option<(Coord, Coord)>> {
        if !rng.chance(prob) {
            return Ok(None);
        }
        let Some(target) = grid.random_empty_neighbor(self.pos, rng) else {
            return Ok(None);
        };
        let from = self.pos;
        self.pos = grid.move_agent(from, target)?;
        Ok(Some((from, self.pos)))
    }
}
