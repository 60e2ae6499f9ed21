//! Fluent builder for constructing a [`Model`].

use epi_disease::PlannerConfig;

use crate::{Model, SimConfig, SimResult};

/// Fluent builder over a [`SimConfig`].
///
/// Every setter is optional; unset fields keep the [`SimConfig::default`]
/// values.
///
/// # Example
///
/// ```rust,ignore
/// let model = ModelBuilder::new()
///     .dimensions(5, 5)
///     .population_density(1.0)
///     .initial_infection_fraction(0.04)
///     .prob_infection(1.0)
///     .planner(PlannerConfig::simple(2, 5, 14))
///     .build()?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct ModelBuilder {
    config: SimConfig,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration (e.g. one loaded from disk).
    pub fn from_config(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn population_density(mut self, density: f64) -> Self {
        self.config.population_density = density;
        self
    }

    pub fn vaccine_density(mut self, density: f64) -> Self {
        self.config.vaccine_density = density;
        self
    }

    pub fn initial_infection_fraction(mut self, fraction: f64) -> Self {
        self.config.initial_infection_fraction = fraction;
        self
    }

    pub fn initial_vaccination_fraction(mut self, fraction: f64) -> Self {
        self.config.initial_vaccination_fraction = fraction;
        self
    }

    pub fn prob_infection(mut self, prob: f64) -> Self {
        self.config.prob_infection = prob;
        self
    }

    pub fn prob_agent_movement(mut self, prob: f64) -> Self {
        self.config.prob_agent_movement = prob;
        self
    }

    pub fn planner(mut self, planner: PlannerConfig) -> Self {
        self.config.planner = planner;
        self
    }

    pub fn max_timesteps(mut self, ticks: u64) -> Self {
        self.config.max_timesteps = ticks;
        self
    }

    pub fn early_stopping_patience(mut self, ticks: u64) -> Self {
        self.config.early_stopping_patience = ticks;
        self
    }

    pub fn toric(mut self, toric: bool) -> Self {
        self.config.toric = toric;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Validate the configuration and construct a ready-to-run [`Model`].
    pub fn build(self) -> SimResult<Model> {
        Model::new(self.config)
    }
}
