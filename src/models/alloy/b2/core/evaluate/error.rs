use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while evaluating Gibbs energy over occupancies.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluateError {
    /// Paired occupancy arrays do not have the same shape.
    #[error("occupancy shape mismatch: y1A {y1a:?} vs y2A {y2a:?}")]
    ShapeMismatch { y1a: Vec<usize>, y2a: Vec<usize> },

    /// An occupancy lies outside `[0, 1]` or is `NaN`.
    #[error("invalid occupancy {value}")]
    Occupancy {
        value: f64,

        #[source]
        source: ConstraintError,
    },
}
