//! `epi-sim` — the epidemic model and its tick loop.
//!
//! # Tick loop
//!
//! ```text
//! tick() while the clock reads `now`:
//!   ① Propagate — snapshot INFECTIOUS + SYMPTOMATIC agents (ascending id);
//!                 each tries to infect its SUSCEPTIBLE Moore neighbors.
//!   ② Collect   — push per-state counts and R0 onto the history.
//!   ③ Advance   — every agent, in a fresh random order:
//!                   random_move, then execute the event due at `now`.
//!   ④ Clock     — now += 1.
//!   ⑤ Stop?     — max_timesteps reached, no SUSCEPTIBLE left, or the
//!                 SUSCEPTIBLE count has plateaued for `patience` ticks.
//! ```
//!
//! Phase ① finishes before phase ③ starts, so an exposure scheduled this
//! tick is never advanced in the same tick.  Between ticks the only
//! mutation is [`Model::vaccinate`].
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`config`]      | `SimConfig` and its validation                       |
//! | [`builder`]     | `ModelBuilder` (fluent construction)                 |
//! | [`model`]       | `Model`                                              |
//! | [`contact`]     | `ContactNetwork` (who infected whom, R0)             |
//! | [`vaccination`] | `VaccinationResponse`                                |
//! | [`stats`]       | `TickStats`, `StopReason`                            |
//! | [`observer`]    | `SimObserver`, `NoopObserver`                        |
//! | [`error`]       | `SimError`, `SimResult<T>`                           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_sim::{ModelBuilder, NoopObserver};
//!
//! let mut model = ModelBuilder::new()
//!     .dimensions(20, 20)
//!     .prob_infection(0.3)
//!     .seed(7)
//!     .build()?;
//! model.run(&mut NoopObserver)?;
//! println!("R0 ≈ {:.2}", model.get_r0());
//! ```

pub mod builder;
pub mod config;
pub mod contact;
pub mod error;
pub mod model;
pub mod observer;
pub mod stats;
pub mod vaccination;

#[cfg(test)]
mod tests;

pub use builder::ModelBuilder;
pub use config::SimConfig;
pub use contact::ContactNetwork;
pub use error::{SimError, SimResult};
pub use model::Model;
pub use observer::{NoopObserver, SimObserver};
pub use stats::{StopReason, TickStats};
pub use vaccination::VaccinationResponse;
