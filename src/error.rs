//! Error types for simulations and the results pipeline.

use thiserror::Error;

/// Invalid simulation parameters. Always reported before any draw is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("universe must contain at least one number")]
    EmptyUniverse,

    #[error("draw size must be at least 1")]
    EmptyDrawSize,

    #[error("draw size {draw_size} exceeds universe size {universe_size}")]
    DrawSizeExceedsUniverse { draw_size: u32, universe_size: u32 },

    #[error("entry set is empty")]
    EmptyEntrySet,

    /// Entry at `index` has the wrong number of members
    #[error("entry {index} has {actual} numbers, expected {expected}")]
    EntrySizeMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("entry {index} contains {number}, outside 1..={universe_size}")]
    NumberOutOfRange {
        index: usize,
        number: u32,
        universe_size: u32,
    },

    #[error("entry {index} repeats {number}")]
    DuplicateNumber { index: usize, number: u32 },

    #[error("number of trials must be at least 1")]
    ZeroTrials,
}

/// Failures while running a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A trial hit its draw cap without matching any entry.
    #[error("trial exhausted after {draws} draws without a match")]
    Exhausted { draws: u64 },
}

/// Failures while loading, cleaning or storing historical draw results.
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("no table found in document")]
    NoTable,

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: invalid draw date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: unable to convert combination '{value}' to numbers")]
    InvalidCombination { row: usize, value: String },

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl From<ureq::Error> for ResultsError {
    fn from(err: ureq::Error) -> Self {
        ResultsError::Fetch(err.to_string())
    }
}
