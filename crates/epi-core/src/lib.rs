//! `epi-core` — foundational types for the `rogi` epidemic grid simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`coord`]       | `Coord`, toric wraparound                             |
//! | [`state`]       | `AgentState` (the six disease compartments)           |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (the single model-owned generator)           |
//! | [`error`]       | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coord;
pub use error::{EpiError, EpiResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use state::AgentState;
pub use time::Tick;
