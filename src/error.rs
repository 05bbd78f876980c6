//! Error types for validation and table I/O.

use thiserror::Error;

/// Errors raised while turning raw input into a [`DecisionProblem`] or
/// while writing a result table.
///
/// Every variant is terminal: the first violation is reported and no
/// partial result is produced. The ranking engine itself never fails on a
/// validated problem.
///
/// [`DecisionProblem`]: crate::problem::DecisionProblem
#[derive(Debug, Error)]
pub enum McdaError {
    #[error("Input file could not be read: {0}")]
    InputUnreadable(String),

    #[error("Input file must contain at least three columns (found {found}).")]
    InsufficientColumns { found: usize },

    #[error("Column '{column}' must be numeric: row {row} has value '{value}'.")]
    NonNumericCriterion {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Weights must be comma-separated positive numbers: invalid token '{0}'.")]
    InvalidWeightFormat(String),

    #[error("Impacts must be '+' or '-': invalid token '{0}'.")]
    InvalidImpactSymbol(String),

    #[error(
        "Number of weights ({weights}) and impacts ({impacts}) must match the number of criteria columns ({expected})."
    )]
    ArityMismatch {
        expected: usize,
        weights: usize,
        impacts: usize,
    },

    #[error("Result file could not be written: {0}")]
    OutputUnwritable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, McdaError>;
