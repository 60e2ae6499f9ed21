//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EpiError` as one variant
//! via `From` where they surface core lookups.

use thiserror::Error;

use crate::{AgentId, AgentState};

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("agent {agent} is not registered as {state}")]
    NotInBucket { agent: AgentId, state: AgentState },
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
