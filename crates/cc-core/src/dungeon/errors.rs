//! Error types for generation and queries.

use thiserror::Error;

/// Failures while building a dungeon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("grid {width}x{height} is too small to hold a room (minimum {min}x{min})")]
    GridTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("no rooms could be placed; retry with a larger grid or fewer rooms")]
    NoRoomsPlaced,
}

/// Failures while querying a finished dungeon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("dungeon has no floor tiles to sample")]
    NoFloorTiles,
}
