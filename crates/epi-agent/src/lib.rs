//! `epi-agent` — agent storage and the per-state index for the simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`agent`]    | `Agent` (position, state, disease schedule), `StateTransition` |
//! | [`store`]    | `AgentStore` (arena indexed by `AgentId`)                  |
//! | [`registry`] | `StateRegistry` (six-bucket partition, activation order)   |
//!
//! # Ownership
//!
//! Agents never hold a reference back to the model.  Operations that touch a
//! collaborator (`Grid`, `DiseasePlanner`, `SimRng`) receive it by reference
//! for the duration of the call; state changes are returned as
//! [`StateTransition`] values that the caller applies to the registry and
//! to the grid's observation tensor.

pub mod agent;
pub mod registry;
pub mod store;


pub use agent::{Agent, StateTransition};
pub use registry::StateRegistry;
pub use store::AgentStore;
