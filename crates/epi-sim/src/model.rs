//! The `Model` struct and its tick loop.

use epi_agent::{Agent, AgentStore, StateRegistry, StateTransition};
use epi_core::{AgentId, AgentState, Coord, EpiError, SimRng, Tick};
use epi_disease::DiseasePlanner;
use epi_grid::{Grid, Observation};
use tracing::{debug, info, trace};

use crate::{
    ContactNetwork, SimConfig, SimObserver, SimResult, StopReason, TickStats, VaccinationResponse,
};

/// The epidemic model: grid, agents, registry, and everything one tick needs.
///
/// The model is either RUNNING or STOPPED.  Once stopped, [`tick`](Self::tick)
/// is a no-op that returns the last observation.
///
/// Create via [`ModelBuilder`][crate::ModelBuilder] or [`Model::new`].
pub struct Model {
    config:   SimConfig,
    planner:  DiseasePlanner,
    grid:     Grid,
    agents:   AgentStore,
    registry: StateRegistry,
    contacts: ContactNetwork,
    rng:      SimRng,

    /// The tick that the next call to `tick()` will process.
    clock: Tick,

    running:     bool,
    stop_reason: Option<StopReason>,

    /// One entry from construction, then one per processed tick.
    history: Vec<TickStats>,

    vaccines_remaining: usize,
    max_vaccines:       usize,
}

impl Model {
    /// Validate `config`, place every agent, and seed the initial infections
    /// and vaccinations.
    ///
    /// Agent `i` is infected at tick 0 when `i < n_infect`, otherwise
    /// vaccinated when `i < n_infect + n_vaccinate`; since placement is
    /// uniformly random the seeds are spatially random too.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`](crate::SimError::Config) for out-of-range
    /// parameters, [`SimError::Disease`](crate::SimError::Disease) for
    /// invalid planner periods.  Nothing is simulated on failure.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let planner = DiseasePlanner::new(config.planner)?;
        let mut grid = Grid::new(config.width, config.height, config.toric)?;
        let mut rng = SimRng::new(config.seed);

        let n_agents = config.agent_count();
        let n_vaccines = (n_agents as f64 * config.vaccine_density).floor() as usize;
        let n_infect = (n_agents as f64 * config.initial_infection_fraction).floor() as usize;
        let n_vaccinate = (n_agents as f64 * config.initial_vaccination_fraction).floor() as usize;

        let mut agents = AgentStore::with_capacity(n_agents);
        let mut registry = StateRegistry::new();

        for i in 0..n_agents {
            let id = agents.spawn(&mut grid, &mut rng)?;
            registry.add(id, AgentState::Susceptible);
            let agent = agents.get_mut(id).ok_or(EpiError::AgentNotFound(id))?;

            if i < n_infect {
                agent.trigger_infection(1.0, &planner, Tick::ZERO, &mut rng);
            } else if i < n_infect + n_vaccinate {
                let transition = agent.set_state(AgentState::Vaccinated);
                apply_transition(&mut registry, &mut grid, transition)?;
            }
        }

        let mut model = Self {
            planner,
            grid,
            agents,
            registry,
            contacts: ContactNetwork::new(),
            rng,
            clock: Tick::ZERO,
            running: true,
            stop_reason: None,
            history: Vec::new(),
            vaccines_remaining: n_vaccines,
            max_vaccines: n_vaccines + n_vaccinate,
            config,
        };
        let initial = model.collect_stats(Tick::ZERO);
        model.history.push(initial);

        info!(
            width = model.config.width,
            height = model.config.height,
            agents = n_agents,
            seeded_infections = n_infect,
            seeded_vaccinations = n_vaccinate,
            vaccines = n_vaccines,
            seed = model.config.seed,
            "Model initialised"
        );
        Ok(model)
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Advance the model by one tick and return the new observation.
    ///
    /// A no-op on a stopped model.
    pub fn tick(&mut self) -> SimResult<&Observation> {
        if !self.running {
            return Ok(self.grid.observation());
        }
        let now = self.clock;

        self.propagate_infections(now)?;

        let stats = self.collect_stats(now);
        debug!(
            tick = now.0,
            susceptible = stats.count(AgentState::Susceptible),
            exposed = stats.count(AgentState::Exposed),
            infectious = stats.count(AgentState::Infectious),
            symptomatic = stats.count(AgentState::Symptomatic),
            recovered = stats.count(AgentState::Recovered),
            vaccinated = stats.count(AgentState::Vaccinated),
            r0 = stats.r0,
            "Tick statistics"
        );
        self.history.push(stats);

        self.advance_agents(now)?;

        self.clock = now.next();
        if let Some(reason) = self.check_termination() {
            self.running = false;
            self.stop_reason = Some(reason);
            info!(tick = self.clock.0, %reason, r0 = self.get_r0(), "Model stopped");
        }
        Ok(self.grid.observation())
    }

    /// Alias of [`tick`](Self::tick).
    pub fn step(&mut self) -> SimResult<&Observation> {
        self.tick()
    }

    /// Try to vaccinate the occupant of `(x, y)`.
    ///
    /// With an empty budget this returns `AGENT_VACCINES_EXHAUSTED` and
    /// spends nothing.  Otherwise one vaccine is spent whatever the outcome.
    /// Only a SUSCEPTIBLE occupant without a pending disease plan is flipped
    /// to VACCINATED; a SUSCEPTIBLE occupant already carrying a plan reports
    /// `AGENT_EXPOSED`.  On a bounded grid an out-of-range coordinate counts
    /// as an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the grid no longer holds the agent it reported at `(x, y)`.
    pub fn vaccinate(&mut self, x: i32, y: i32) -> (bool, VaccinationResponse) {
        let coord = Coord::new(x, y);
        let response = self.vaccinate_cell(coord);
        trace!(tick = self.clock.0, %coord, %response, remaining = self.vaccines_remaining, "Vaccination");
        (response.is_success(), response)
    }

    /// [`vaccinate`](Self::vaccinate), reporting the attempt to `observer`.
    pub fn vaccinate_observed<O: SimObserver>(
        &mut self,
        x:        i32,
        y:        i32,
        observer: &mut O,
    ) -> (bool, VaccinationResponse) {
        let (success, response) = self.vaccinate(x, y);
        observer.on_vaccination(self.clock, Coord::new(x, y), success, response);
        (success, response)
    }

    /// Tick until the model stops, then call `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.running {
            self.tick()?;
            observer.on_tick_end(self.last_stats());
        }
        observer.on_sim_end(self.last_stats(), self.stop_reason);
        Ok(())
    }

    /// Process at most `n` ticks, stopping early if the model stops.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if !self.running {
                break;
            }
            self.tick()?;
            observer.on_tick_end(self.last_stats());
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn get_observation(&self) -> &Observation {
        self.grid.observation()
    }

    pub fn get_population_fraction_by_state(&self, state: AgentState) -> f64 {
        self.registry.fraction(state)
    }

    pub fn get_population_count_by_state(&self, state: AgentState) -> usize {
        self.registry.count(state)
    }

    /// Agents currently in `state`, ascending by id.
    pub fn agents_by_state(&self, state: AgentState) -> impl Iterator<Item = AgentId> + '_ {
        self.registry.agents_by_state(state)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn get_r0(&self) -> f64 {
        self.contacts.r0()
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// The tick the next call to [`tick`](Self::tick) will process.
    pub fn current_tick(&self) -> Tick {
        self.clock
    }

    pub fn history(&self) -> &[TickStats] {
        &self.history
    }

    /// The most recent history entry.
    pub fn last_stats(&self) -> &TickStats {
        // The constructor always pushes the initial entry.
        &self.history[self.history.len() - 1]
    }

    pub fn vaccines_remaining(&self) -> usize {
        self.vaccines_remaining
    }

    /// Vaccine budget plus the doses used for initial vaccinations.
    pub fn max_vaccines(&self) -> usize {
        self.max_vaccines
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn contact_network(&self) -> &ContactNetwork {
        &self.contacts
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Phase ①.  The infector snapshot is sorted by id and neighbors are
    /// scanned in a fixed offset order, so a target reachable from several
    /// infectors is credited to the lowest-id one.
    fn propagate_infections(&mut self, now: Tick) -> SimResult<()> {
        let mut infectors: Vec<AgentId> = self
            .registry
            .agents_by_state(AgentState::Infectious)
            .chain(self.registry.agents_by_state(AgentState::Symptomatic))
            .collect();
        infectors.sort_unstable();

        for infector in infectors {
            let pos = self
                .agents
                .get(infector)
                .ok_or(EpiError::AgentNotFound(infector))?
                .pos();
            for target in self.grid.moore_neighbors(pos) {
                let agent = self
                    .agents
                    .get_mut(target)
                    .ok_or(EpiError::AgentNotFound(target))?;
                if agent.state() != AgentState::Susceptible {
                    continue;
                }
                if agent.trigger_infection(self.config.prob_infection, &self.planner, now, &mut self.rng) {
                    self.contacts.register_infection(infector, target);
                    trace!(tick = now.0, %infector, %target, "Infection");
                }
            }
        }
        Ok(())
    }

    /// Phase ③.
    fn advance_agents(&mut self, now: Tick) -> SimResult<()> {
        let order = self.registry.activation_order(&mut self.rng);
        for id in order {
            let agent = self.agents.get_mut(id).ok_or(EpiError::AgentNotFound(id))?;
            agent.random_move(self.config.prob_agent_movement, &mut self.grid, &mut self.rng)?;
            if let Some(transition) = agent.process_due_events(now) {
                apply_transition(&mut self.registry, &mut self.grid, transition)?;
            }
        }
        Ok(())
    }

    /// Phase ⑤, evaluated after the clock has advanced.
    fn check_termination(&self) -> Option<StopReason> {
        if self.clock.0 >= self.config.max_timesteps {
            return Some(StopReason::MaxTimesteps);
        }
        if self.registry.count(AgentState::Susceptible) == 0 {
            return Some(StopReason::SusceptibleExhausted);
        }
        let patience = self.config.early_stopping_patience;
        if patience > 0 && self.clock.0 > patience {
            let window = &self.history[self.history.len().saturating_sub(patience as usize)..];
            let first = window[0].count(AgentState::Susceptible);
            if window.iter().all(|s| s.count(AgentState::Susceptible) == first) {
                return Some(StopReason::Plateau);
            }
        }
        None
    }

    fn collect_stats(&self, tick: Tick) -> TickStats {
        TickStats {
            tick,
            counts: self.registry.counts(),
            total: self.registry.total(),
            r0: self.contacts.r0(),
        }
    }

    fn vaccinate_cell(&mut self, coord: Coord) -> VaccinationResponse {
        if self.vaccines_remaining == 0 {
            return VaccinationResponse::AgentVaccinesExhausted;
        }
        self.vaccines_remaining -= 1;

        let Some(id) = self.grid.get(coord) else {
            return VaccinationResponse::CellEmpty;
        };
        let Some(agent) = self.agents.get_mut(id) else {
            return VaccinationResponse::CellEmpty;
        };
        if let Some(miss) = VaccinationResponse::for_occupant(agent.state()) {
            return miss;
        }
        if agent.is_schedule_locked() {
            return VaccinationResponse::AgentExposed;
        }

        let transition = agent.set_state(AgentState::Vaccinated);
        if let Err(e) = apply_transition(&mut self.registry, &mut self.grid, transition) {
            panic!("grid lost track of {id} at {coord}: {e}");
        }
        VaccinationResponse::VaccinationSuccess
    }
}

/// Mirror an agent's state change into the registry and the observation.
fn apply_transition(
    registry:   &mut StateRegistry,
    grid:       &mut Grid,
    transition: StateTransition,
) -> SimResult<()> {
    registry.update_bucket(transition.agent, transition.previous, transition.current);
    grid.set_state(transition.position, transition.current)?;
    Ok(())
}
