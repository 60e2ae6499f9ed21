//! `epi-disease` — stochastic disease progression and per-agent plans.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`event`]   | `AgentEvent` (one scheduled state transition)         |
//! | [`plan`]    | `DiseasePlan` (the four causally ordered events)      |
//! | [`planner`] | `PlannerConfig`, `Progression`, `DiseasePlanner`      |
//! | [`error`]   | `DiseaseError`, `DiseaseResult<T>`                    |
//!
//! # Timeline model (summary)
//!
//! An infection triggered at tick `t0` produces:
//!
//! ```text
//! t0               SUSCEPTIBLE → EXPOSED
//! t0 + latent      EXPOSED     → INFECTIOUS
//! t0 + incubation  INFECTIOUS  → SYMPTOMATIC
//! t0 + recovery    SYMPTOMATIC → RECOVERED
//! ```
//!
//! with `0 < latent < incubation < recovery`, so the four timesteps are
//! strictly increasing and never collide.

pub mod error;
pub mod event;
pub mod plan;
pub mod planner;


pub use error::{DiseaseError, DiseaseResult};
pub use event::AgentEvent;
pub use plan::DiseasePlan;
pub use planner::{DiseasePlanner, MAX_PERIOD_TICKS, PlannerConfig, Progression};
