use epi_core::EpiError;
use epi_disease::DiseaseError;
use epi_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("disease planner: {0}")]
    Disease(#[from] DiseaseError),

    #[error("grid: {0}")]
    Grid(#[from] GridError),

    #[error(transparent)]
    Core(#[from] EpiError),
}

pub type SimResult<T> = Result<T, SimError>;
