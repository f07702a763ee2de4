//! Errors raised while building a maze

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Maze size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("Maze size {0} does not fit in memory addressing")]
    TooLarge(usize),

    #[error("Could not allocate maze storage: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Braid ratio must be within [0, 1], got {0}")]
    InvalidBraidRatio(f64),
}

pub type Result<T> = std::result::Result<T, MazeError>;
