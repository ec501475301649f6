//! Error type for training and evaluation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlaError>;

/// Precondition violations reported by the perceptron.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaError {
    /// `train` or `evaluate` was given no points.
    #[error("label set is empty; at least one labeled point is required")]
    EmptyLabelSet,

    /// A point's feature count does not match the perceptron's dimension.
    #[error("dimension mismatch: perceptron expects {expected} features, point has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Training hit the configured round cap before converging.
    #[error("training did not converge within {rounds} corrections")]
    IterationCapReached { rounds: usize },

    /// A label coming from outside the crate was not +1 or -1.
    #[error("invalid label {0}: labels must be +1 or -1")]
    InvalidLabel(i64),
}
