//! Grid error type.

use thiserror::Error;

use epi_core::Coord;

/// Errors produced by `epi-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("no empty cell left on the {width}x{height} grid")]
    GridFull { width: u32, height: u32 },

    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),

    #[error("cell {0} is empty")]
    CellEmpty(Coord),

    #[error("cell {0} lies outside the bounded grid")]
    OutOfBounds(Coord),

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
