//! Error types raised while configuring the weighted scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors returned by [`ScoreWeights::validate`](crate::ScoreWeights::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreWeightsError {
    /// A term weight was NaN or infinite.
    #[error("{term} weight {value} is not finite")]
    NonFinite {
        /// Name of the offending term.
        term: &'static str,
        /// Weight as supplied.
        value: f64,
    },
    /// A term weight was below zero.
    #[error("{term} weight {value} is negative")]
    Negative {
        /// Name of the offending term.
        term: &'static str,
        /// Weight as supplied.
        value: f64,
    },
    /// The review count at which popularity saturates was zero.
    #[error("review saturation must be greater than zero")]
    ZeroReviewSaturation,
}
