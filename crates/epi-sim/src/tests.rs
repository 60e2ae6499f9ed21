//! Unit tests for epi-sim.

use epi_core::{AgentId, AgentState, Coord};
use epi_disease::{DiseaseError, PlannerConfig};

use crate::{
    ContactNetwork, Model, ModelBuilder, NoopObserver, SimConfig, SimError, SimObserver,
    StopReason, TickStats, VaccinationResponse,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Quiet 6×6 model: no seeds, no movement, a deterministic planner.
fn quiet() -> ModelBuilder {
    ModelBuilder::new()
        .dimensions(6, 6)
        .population_density(1.0)
        .initial_infection_fraction(0.0)
        .prob_infection(0.0)
        .planner(PlannerConfig::simple(2, 5, 14))
        .seed(17)
}

fn position_of_first(model: &Model, state: AgentState) -> Coord {
    let id = model.agents_by_state(state).next().expect("no agent in state");
    model.agent(id).unwrap().pos()
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn defaults_match_reference_model() {
        let c = SimConfig::default();
        assert_eq!((c.width, c.height), (50, 50));
        assert_eq!(c.population_density, 0.75);
        assert_eq!(c.max_timesteps, 200);
        assert_eq!(c.early_stopping_patience, 14);
        assert!(c.toric);
        assert_eq!(c.agent_count(), 1875);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn planner_that_could_stall_rejected_at_build() {
        let planner = PlannerConfig {
            latent_mu:        5.0,
            latent_sigma:     3.0,
            incubation_mu:    6.0,
            incubation_sigma: 0.0,
            recovery_mu:      20.0,
            recovery_sigma:   0.0,
        };
        let result = quiet().initial_infection_fraction(0.5).planner(planner).build();
        assert!(
            matches!(result, Err(SimError::Disease(DiseaseError::FixedAfterNoisy { .. }))),
            "expected a disease error"
        );
    }

    #[test]
    fn planner_with_unbounded_recovery_rejected_at_build() {
        let planner = PlannerConfig { recovery_mu: 1e30, ..PlannerConfig::simple(1, 2, 3) };
        let result = quiet().planner(planner).build();
        assert!(matches!(result, Err(SimError::Disease(DiseaseError::PeriodTooLong { .. }))));
    }

    #[test]
    fn density_above_one_rejected() {
        let err = quiet().population_density(1.5).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)), "{err}");
    }

    #[test]
    fn zero_density_rejected() {
        assert!(matches!(quiet().population_density(0.0).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn seed_fractions_must_fit_population() {
        let result = quiet()
            .initial_infection_fraction(0.7)
            .initial_vaccination_fraction(0.5)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn probability_out_of_range_rejected() {
        assert!(matches!(quiet().prob_infection(1.01).build(), Err(SimError::Config(_))));
        assert!(matches!(quiet().prob_agent_movement(-0.1).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn empty_grid_rejected() {
        assert!(matches!(quiet().dimensions(0, 4).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn unsorted_planner_rejected_at_construction() {
        let result = quiet().planner(PlannerConfig::simple(10, 5, 20)).build();
        assert!(matches!(result, Err(SimError::Disease(_))));
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn population_and_budget() {
        let model = quiet()
            .population_density(0.5)
            .vaccine_density(0.5)
            .initial_vaccination_fraction(0.25)
            .build()
            .unwrap();
        assert_eq!(model.agent_count(), 18);
        assert_eq!(model.vaccines_remaining(), 9);
        assert_eq!(model.get_population_count_by_state(AgentState::Vaccinated), 4);
        assert_eq!(model.max_vaccines(), 13);
        assert_eq!(model.grid().empty_count(), 18);
    }

    #[test]
    fn seeds_are_scheduled_but_still_susceptible() {
        let model = quiet().initial_infection_fraction(0.25).build().unwrap();
        let locked = (0..36)
            .filter(|&i| model.agent(AgentId(i)).unwrap().is_schedule_locked())
            .count();
        assert_eq!(locked, 9);
        assert_eq!(model.get_population_count_by_state(AgentState::Susceptible), 36);
    }

    #[test]
    fn initial_history_entry() {
        let model = quiet().build().unwrap();
        assert_eq!(model.history().len(), 1);
        assert_eq!(model.last_stats().total, 36);
        assert_eq!(model.last_stats().fraction(AgentState::Susceptible), 1.0);
        assert!(model.is_running());
        assert_eq!(model.get_r0(), 0.0);
    }
}

// ── Vaccination ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod vaccination {
    use super::*;

    #[test]
    fn susceptible_then_repeat() {
        let mut model = quiet().vaccine_density(1.0).build().unwrap();
        let at = position_of_first(&model, AgentState::Susceptible);
        let budget = model.vaccines_remaining();

        assert_eq!(model.vaccinate(at.x, at.y), (true, VaccinationResponse::VaccinationSuccess));
        assert_eq!(model.vaccines_remaining(), budget - 1);
        assert_eq!(model.get_observation().state_at(at), Some(AgentState::Vaccinated));
        assert_eq!(model.get_population_count_by_state(AgentState::Vaccinated), 1);

        assert_eq!(model.vaccinate(at.x, at.y), (false, VaccinationResponse::AgentVaccinated));
        assert_eq!(model.vaccines_remaining(), budget - 2);
    }

    #[test]
    fn exhausted_budget_is_not_decremented() {
        let mut model = quiet().build().unwrap();
        assert_eq!(model.vaccines_remaining(), 0);
        assert_eq!(
            model.vaccinate(0, 0),
            (false, VaccinationResponse::AgentVaccinesExhausted)
        );
        assert_eq!(model.vaccines_remaining(), 0);
        assert_eq!(model.get_population_count_by_state(AgentState::Vaccinated), 0);
    }

    #[test]
    fn empty_cell_spends_a_dose() {
        let mut model = quiet().population_density(0.5).vaccine_density(1.0).build().unwrap();
        let empty = (0..6)
            .flat_map(|x| (0..6).map(move |y| Coord::new(x, y)))
            .find(|&c| model.grid().get(c).is_none())
            .unwrap();
        let budget = model.vaccines_remaining();
        assert_eq!(model.vaccinate(empty.x, empty.y), (false, VaccinationResponse::CellEmpty));
        assert_eq!(model.vaccines_remaining(), budget - 1);
    }

    #[test]
    fn toric_coordinates_wrap() {
        let mut model = quiet().vaccine_density(1.0).build().unwrap();
        let at = position_of_first(&model, AgentState::Susceptible);
        let (ok, _) = model.vaccinate(at.x + 6, at.y - 6);
        assert!(ok);
        assert_eq!(model.get_observation().state_at(at), Some(AgentState::Vaccinated));
    }

    #[test]
    fn out_of_range_on_bounded_grid_is_empty() {
        let mut model = quiet().toric(false).vaccine_density(1.0).build().unwrap();
        assert_eq!(model.vaccinate(6, 0), (false, VaccinationResponse::CellEmpty));
    }

    #[test]
    fn scheduled_seed_reports_exposed() {
        let mut model = quiet()
            .initial_infection_fraction(0.5)
            .vaccine_density(1.0)
            .build()
            .unwrap();
        let at = model.agent(AgentId(0)).unwrap().pos();
        assert_eq!(model.vaccinate(at.x, at.y), (false, VaccinationResponse::AgentExposed));
        assert_eq!(model.agent(AgentId(0)).unwrap().state(), AgentState::Susceptible);

        // Once the seed has moved on, the usual state-specific code applies.
        model.tick().unwrap();
        assert_eq!(model.vaccinate(at.x, at.y), (false, VaccinationResponse::AgentExposed));
        model.tick().unwrap();
        model.tick().unwrap();
        assert_eq!(model.vaccinate(at.x, at.y), (false, VaccinationResponse::AgentInfectious));
    }

    #[test]
    fn response_codes() {
        assert!(VaccinationResponse::VaccinationSuccess.is_success());
        assert_eq!(
            VaccinationResponse::ALL.iter().filter(|r| r.is_success()).count(),
            1
        );
        assert_eq!(
            VaccinationResponse::AgentVaccinesExhausted.to_string(),
            "AGENT_VACCINES_EXHAUSTED"
        );
        assert_eq!(VaccinationResponse::for_occupant(AgentState::Susceptible), None);
        assert_eq!(
            VaccinationResponse::for_occupant(AgentState::Recovered),
            Some(VaccinationResponse::AgentRecovered)
        );
    }
}

// ── Termination ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod termination {
    use super::*;

    #[test]
    fn max_timesteps() {
        let mut model = quiet().max_timesteps(3).build().unwrap();
        model.run(&mut NoopObserver).unwrap();
        assert!(!model.is_running());
        assert_eq!(model.stop_reason(), Some(StopReason::MaxTimesteps));
        assert_eq!(model.current_tick().0, 3);
        assert_eq!(model.history().len(), 4);
    }

    #[test]
    fn tick_after_stop_is_noop() {
        let mut model = quiet().max_timesteps(2).build().unwrap();
        model.run(&mut NoopObserver).unwrap();
        let before = model.get_observation().clone();
        let obs = model.tick().unwrap().clone();
        assert_eq!(obs, before);
        assert_eq!(model.current_tick().0, 2);
        assert_eq!(model.history().len(), 3);
    }

    #[test]
    fn no_susceptibles_left() {
        let mut model = quiet().initial_vaccination_fraction(1.0).build().unwrap();
        model.tick().unwrap();
        assert_eq!(model.stop_reason(), Some(StopReason::SusceptibleExhausted));
    }

    #[test]
    fn plateau() {
        let mut model = quiet().early_stopping_patience(3).max_timesteps(100).build().unwrap();
        model.run(&mut NoopObserver).unwrap();
        assert_eq!(model.stop_reason(), Some(StopReason::Plateau));
        assert_eq!(model.current_tick().0, 4);
    }

    #[test]
    fn zero_patience_disables_plateau() {
        let mut model = quiet().early_stopping_patience(0).max_timesteps(10).build().unwrap();
        model.run(&mut NoopObserver).unwrap();
        assert_eq!(model.stop_reason(), Some(StopReason::MaxTimesteps));
        assert_eq!(model.current_tick().0, 10);
    }

    #[test]
    fn run_ticks_stops_early() {
        let mut model = quiet().max_timesteps(2).build().unwrap();
        model.run_ticks(10, &mut NoopObserver).unwrap();
        assert_eq!(model.current_tick().0, 2);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;
    use epi_core::Tick;

    #[derive(Default)]
    struct Recorder {
        ticks:        Vec<Tick>,
        vaccinations: Vec<(Coord, VaccinationResponse)>,
        ended:        Option<(Tick, Option<StopReason>)>,
    }

    impl SimObserver for Recorder {
        fn on_tick_end(&mut self, stats: &TickStats) {
            self.ticks.push(stats.tick);
        }

        fn on_vaccination(&mut self, _tick: Tick, coord: Coord, _ok: bool, r: VaccinationResponse) {
            self.vaccinations.push((coord, r));
        }

        fn on_sim_end(&mut self, last: &TickStats, reason: Option<StopReason>) {
            self.ended = Some((last.tick, reason));
        }
    }

    #[test]
    fn run_reports_every_tick_and_the_end() {
        let mut model = quiet().max_timesteps(5).early_stopping_patience(0).build().unwrap();
        let mut rec = Recorder::default();
        model.run(&mut rec).unwrap();
        assert_eq!(rec.ticks, (0..5).map(Tick).collect::<Vec<_>>());
        assert_eq!(rec.ended, Some((Tick(4), Some(StopReason::MaxTimesteps))));
    }

    #[test]
    fn observed_vaccination() {
        let mut model = quiet().build().unwrap();
        let mut rec = Recorder::default();
        model.vaccinate_observed(1, 2, &mut rec);
        assert_eq!(
            rec.vaccinations,
            vec![(Coord::new(1, 2), VaccinationResponse::AgentVaccinesExhausted)]
        );
    }
}

// ── ContactNetwork ────────────────────────────────────────────────────────────

#[cfg(test)]
mod contact {
    use super::*;

    #[test]
    fn empty_network_r0_is_zero() {
        assert_eq!(ContactNetwork::new().r0(), 0.0);
    }

    #[test]
    fn three_infectors_two_targets_each() {
        let mut net = ContactNetwork::new();
        for infector in 0..3 {
            for k in 0..2 {
                net.register_infection(AgentId(infector), AgentId(10 + infector * 2 + k));
            }
        }
        assert_eq!(net.r0(), 2.0);
        assert_eq!(net.infector_count(), 3);
        assert_eq!(net.total_infections(), 6);
        assert_eq!(net.infected_by(AgentId(1)), vec![AgentId(12), AgentId(13)]);
        assert!(net.infected_by(AgentId(9)).is_empty());
    }

    #[test]
    fn uneven_counts_average() {
        let mut net = ContactNetwork::new();
        net.register_infection(AgentId(0), AgentId(1));
        net.register_infection(AgentId(0), AgentId(2));
        net.register_infection(AgentId(0), AgentId(3));
        net.register_infection(AgentId(4), AgentId(5));
        assert_eq!(net.r0(), 2.0);
    }
}
