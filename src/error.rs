//! Error types for board parsing and bounded solving

use thiserror::Error;

use crate::solver::SearchStats;

/// Errors raised while reading or validating a board
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input ended before the dimension token
    #[error("missing board dimension")]
    MissingDimension,

    /// A token that is not a non-negative integer
    #[error("invalid integer token {token:?} at position {position}")]
    InvalidToken { token: String, position: usize },

    /// Dimension below 2
    #[error("board dimension must be at least 2, got {0}")]
    DimensionTooSmall(usize),

    /// Tile count disagrees with the declared dimension
    #[error("expected {expected} tiles for the declared dimension, found {actual}")]
    TileCount { expected: usize, actual: usize },

    /// A row whose length differs from the number of rows
    #[error("row {row} has {actual} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A value outside `0..N²`
    #[error("tile {value} is out of range 0..={max}")]
    TileOutOfRange { value: u32, max: usize },

    /// A value appearing more than once
    #[error("tile {0} appears more than once")]
    DuplicateTile(u32),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a search run under a caller-imposed bound
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The expansion budget ran out before either track reached its goal
    #[error("expansion limit of {limit} reached after {} iterations", .stats.iterations)]
    ExpansionLimit { limit: usize, stats: SearchStats },
}
