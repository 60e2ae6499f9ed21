//! `DiseasePlanner` — samples SEIR durations and builds disease plans.
//!
//! # Sampling
//!
//! Each duration is drawn from `Normal(mu, sigma)` and rounded to the nearest
//! tick (ties to even).  Draws are rejected and repeated in dependency order:
//!
//! ```text
//! latent      until latent     >= 1
//! incubation  until incubation >  latent
//! recovery    until recovery   >  incubation
//! ```
//!
//! A latent period of zero would put `S→E` and `E→I` on the same timestep,
//! so the lower bound is one tick.  Construction rejects configurations whose
//! rounded means violate these bounds; with zero sigmas such a configuration
//! would otherwise never terminate.
//!
//! A zero-sigma period following a noisy one is rejected too: the noisy draw
//! eventually lands at or past the fixed value and every later draw fails.
//!
//! Means and sigmas are capped at [`MAX_PERIOD_TICKS`].  A Box-Muller draw
//! never exceeds nine standard deviations, so every sample fits comfortably
//! in a `u64` and adding it to a simulation tick cannot overflow.
//!
//! Every `Normal` sample consumes two RNG draws (see `SimRng::normal`).

use epi_core::{SimRng, Tick};

use crate::{DiseaseError, DiseasePlan, DiseaseResult};

/// Upper bound on every mean and sigma, in ticks.
pub const MAX_PERIOD_TICKS: f64 = u32::MAX as f64;

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Mean and standard deviation of each disease period, in ticks.
///
/// Periods are measured from the moment of exposure, so `incubation` and
/// `recovery` are cumulative rather than per-stage durations.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub latent_mu:        f64,
    pub latent_sigma:     f64,
    pub incubation_mu:    f64,
    pub incubation_sigma: f64,
    pub recovery_mu:      f64,
    pub recovery_sigma:   f64,
}

impl PlannerConfig {
    /// Fixed-length timeline: all sigmas zero.
    pub fn simple(latent: u64, incubation: u64, recovery: u64) -> Self {
        Self {
            latent_mu:        latent as f64,
            latent_sigma:     0.0,
            incubation_mu:    incubation as f64,
            incubation_sigma: 0.0,
            recovery_mu:      recovery as f64,
            recovery_sigma:   0.0,
        }
    }

    /// `true` when every sigma is zero and sampling is deterministic.
    pub fn is_deterministic(&self) -> bool {
        self.latent_sigma == 0.0 && self.incubation_sigma == 0.0 && self.recovery_sigma == 0.0
    }

    /// Check the configuration without building a planner.
    ///
    /// # Errors
    ///
    /// - [`DiseaseError::InvalidSigma`] for a negative or non-finite sigma.
    /// - [`DiseaseError::UnsortedPeriods`] unless
    ///   `latent_mu < incubation_mu < recovery_mu`.
    /// - [`DiseaseError::PeriodTooLong`] for a mean or sigma above
    ///   [`MAX_PERIOD_TICKS`].
    /// - [`DiseaseError::DegeneratePeriods`] if the rounded means are not
    ///   strictly increasing from at least one tick.
    /// - [`DiseaseError::FixedAfterNoisy`] for a zero sigma that follows a
    ///   non-zero one.
    pub fn validate(&self) -> DiseaseResult<()> {
        let sigmas = [
            ("latent_sigma", self.latent_sigma),
            ("incubation_sigma", self.incubation_sigma),
            ("recovery_sigma", self.recovery_sigma),
        ];
        for (name, value) in sigmas {
            if !value.is_finite() || value < 0.0 {
                return Err(DiseaseError::InvalidSigma { name, value });
            }
            if value > MAX_PERIOD_TICKS {
                return Err(DiseaseError::PeriodTooLong { name, value });
            }
        }

        let (l, i, r) = (self.latent_mu, self.incubation_mu, self.recovery_mu);
        // Negated comparisons so that NaN means are rejected too.
        if !(l < i && i < r) {
            return Err(DiseaseError::UnsortedPeriods { latent: l, incubation: i, recovery: r });
        }
        // Sorted, so the recovery mean is the largest.
        if !(r <= MAX_PERIOD_TICKS) {
            return Err(DiseaseError::PeriodTooLong { name: "recovery_mu", value: r });
        }

        let (rl, ri, rr) = (l.round_ties_even(), i.round_ties_even(), r.round_ties_even());
        if !(rl >= 1.0 && rl < ri && ri < rr) {
            return Err(DiseaseError::DegeneratePeriods { latent: rl, incubation: ri, recovery: rr });
        }

        let mut noisy = false;
        for (name, value) in sigmas {
            if value > 0.0 {
                noisy = true;
            } else if noisy {
                return Err(DiseaseError::FixedAfterNoisy { name });
            }
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            latent_mu:        8.0,
            latent_sigma:     0.0,
            incubation_mu:    20.0,
            incubation_sigma: 0.0,
            recovery_mu:      56.0,
            recovery_sigma:   0.0,
        }
    }
}

// ── Progression ───────────────────────────────────────────────────────────────

/// One sampled set of cumulative periods, in ticks since exposure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    pub latent:     u64,
    pub incubation: u64,
    pub recovery:   u64,
}

impl From<Progression> for (u64, u64, u64) {
    fn from(p: Progression) -> Self {
        (p.latent, p.incubation, p.recovery)
    }
}

// ── DiseasePlanner ────────────────────────────────────────────────────────────

/// Validated sampler of disease timelines.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiseasePlanner {
    config: PlannerConfig,
}

impl DiseasePlanner {
    /// Validate `config` and wrap it.
    ///
    /// # Errors
    ///
    /// See [`PlannerConfig::validate`].
    pub fn new(config: PlannerConfig) -> DiseaseResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// A deterministic planner with fixed periods.
    ///
    /// # Errors
    ///
    /// [`DiseaseError::UnsortedPeriods`] unless `latent < incubation < recovery`,
    /// [`DiseaseError::DegeneratePeriods`] if `latent == 0`.
    pub fn simple(latent: u64, incubation: u64, recovery: u64) -> DiseaseResult<Self> {
        Self::new(PlannerConfig::simple(latent, incubation, recovery))
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Draw one progression by rejection sampling (see module docs).
    pub fn sample_progression(&self, rng: &mut SimRng) -> Progression {
        let c = &self.config;
        let latent = sample_above(rng, c.latent_mu, c.latent_sigma, 0);
        let incubation = sample_above(rng, c.incubation_mu, c.incubation_sigma, latent);
        let recovery = sample_above(rng, c.recovery_mu, c.recovery_sigma, incubation);
        Progression { latent, incubation, recovery }
    }

    /// Sample once and lay the plan out from `base`.
    pub fn build_plan(&self, base: Tick, rng: &mut SimRng) -> DiseasePlan {
        let progression = self.sample_progression(rng);
        Self::plan_from(progression, base)
    }

    /// Lay out an already-sampled `progression` from `base`.  Draws nothing.
    pub fn plan_from(progression: Progression, base: Tick) -> DiseasePlan {
        DiseasePlan::new(progression, base)
    }
}

/// First rounded `Normal(mu, sigma)` sample strictly greater than `floor`.
fn sample_above(rng: &mut SimRng, mu: f64, sigma: f64, floor: u64) -> u64 {
    loop {
        let value = rng.normal(mu, sigma).round_ties_even();
        if value > floor as f64 {
            return value as u64;
        }
    }
}
