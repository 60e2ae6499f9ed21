//! `SimConfig` — every construction parameter of a [`Model`](crate::Model).

use epi_disease::PlannerConfig;

use crate::{SimError, SimResult};

/// Top-level model configuration.
///
/// Typically built with [`ModelBuilder`](crate::ModelBuilder) or loaded from
/// a JSON file by the application crate (with the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub width:  u32,
    pub height: u32,

    /// Fraction of cells that hold an agent, in `(0, 1]`.
    pub population_density: f64,

    /// Vaccine budget as a fraction of the agent count.  May exceed 1.
    pub vaccine_density: f64,

    /// Fraction of agents seeded with an infection at tick 0.
    pub initial_infection_fraction: f64,

    /// Fraction of agents vaccinated before the first tick.
    pub initial_vaccination_fraction: f64,

    /// Per-neighbor, per-tick transmission probability.
    pub prob_infection: f64,

    /// Per-tick probability that an agent steps to an empty neighbor.
    pub prob_agent_movement: f64,

    #[cfg_attr(feature = "serde", serde(rename = "disease_planner_config"))]
    pub planner: PlannerConfig,

    /// The model stops once the clock reaches this tick.
    pub max_timesteps: u64,

    /// Plateau window in ticks.  `0` disables the plateau check.
    pub early_stopping_patience: u64,

    /// Wrap coordinates at the edges.
    pub toric: bool,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:                        50,
            height:                       50,
            population_density:           0.75,
            vaccine_density:              0.0,
            initial_infection_fraction:   0.1,
            initial_vaccination_fraction: 0.0,
            prob_infection:               0.2,
            prob_agent_movement:          0.0,
            planner:                      PlannerConfig::default(),
            max_timesteps:                200,
            early_stopping_patience:      14,
            toric:                        true,
            seed:                         0,
        }
    }
}

impl SimConfig {
    /// `floor(width * height * population_density)`.
    pub fn agent_count(&self) -> usize {
        (self.width as f64 * self.height as f64 * self.population_density).floor() as usize
    }

    /// Reject parameter combinations that cannot produce a valid run.
    ///
    /// Planner parameters are checked separately when the planner is built.
    pub fn validate(&self) -> SimResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(config_err(format!(
                "grid must be at least 1x1 (got {}x{})",
                self.width, self.height
            )));
        }
        if !(self.population_density > 0.0 && self.population_density <= 1.0) {
            return Err(config_err(format!(
                "population_density must be in (0, 1] (got {})",
                self.population_density
            )));
        }
        if !(self.vaccine_density.is_finite() && self.vaccine_density >= 0.0) {
            return Err(config_err(format!(
                "vaccine_density must be finite and non-negative (got {})",
                self.vaccine_density
            )));
        }
        for (name, value) in [
            ("initial_infection_fraction", self.initial_infection_fraction),
            ("initial_vaccination_fraction", self.initial_vaccination_fraction),
            ("prob_infection", self.prob_infection),
            ("prob_agent_movement", self.prob_agent_movement),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(config_err(format!("{name} must be in [0, 1] (got {value})")));
            }
        }
        let seeded = self.initial_infection_fraction + self.initial_vaccination_fraction;
        if seeded > 1.0 {
            return Err(config_err(format!(
                "initial infection and vaccination fractions sum to {seeded}, above 1"
            )));
        }
        Ok(())
    }
}

fn config_err(msg: String) -> SimError {
    SimError::Config(msg)
}
