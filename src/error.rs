//! Engine error types.
//!
//! Unmet demand is not an error: it is reported through
//! [`Coverage`](crate::scheduler::Coverage). Errors here are precondition
//! violations of the genetic operators and invalid configuration.

use thiserror::Error;

/// Errors raised by the scheduling engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Crossover parents have assignment lists of different length.
    #[error("mismatched parent length: {left} vs {right} assignments")]
    MismatchedParentLength {
        /// Length of the first parent.
        left: usize,
        /// Length of the second parent.
        right: usize,
    },
    /// A genetic configuration value is out of range.
    #[error("invalid genetic configuration: {0}")]
    InvalidConfig(String),
    /// Mutation needed a replacement from an empty pool.
    #[error("cannot mutate: the {0} pool is empty")]
    EmptyResourcePool(&'static str),
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;
