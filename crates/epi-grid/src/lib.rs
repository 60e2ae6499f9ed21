//! `epi-grid` — the population grid and its observation tensor.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`grid`]        | `Grid` (occupancy + empty-cell index), `Neighborhood`    |
//! | [`observation`] | `Observation` (width × height × state one-hot tensor)    |
//! | [`error`]       | `GridError`, `GridResult<T>`                             |
//!
//! # Two views, one mutation path
//!
//! `Grid` keeps a sparse view (cell → `AgentId`, plus a swap-remove list of
//! empty cells) and a dense view (the [`Observation`] tensor).  Every
//! mutation goes through a `Grid` method that updates both, so the two can
//! never disagree about which cells are occupied.

pub mod error;
pub mod grid;
pub mod observation;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{Grid, Neighborhood};
pub use observation::Observation;
