//! Crate-wide error type.
//!
//! Per-record problems (missing or NaN scores) are not errors: the pipeline
//! filters those records out and reports them in
//! [`RankingOutcome::excluded`](crate::pipeline::RankingOutcome::excluded).
//! Only structural violations abort a ranking call.

use thiserror::Error;

/// Errors that abort an entire ranking call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// A cost vector's dimensionality disagrees with the rest of the batch.
    ///
    /// This is a programming error in the caller, not a data condition:
    /// no partial result is produced.
    #[error("cost vector at index {index} has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        /// Position of the offending vector in the evaluator input.
        index: usize,
        /// Dimensionality established by the first vector.
        expected: usize,
        /// Dimensionality actually found.
        found: usize,
    },

    /// The pipeline configuration failed validation.
    #[error("invalid ranking configuration: {message}")]
    InvalidConfig {
        /// Description from [`RankingConfig::validate`](crate::pipeline::RankingConfig::validate).
        message: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RankError>;
