//! Error types raised while evaluating proximity alerts.

use placewise_core::PlaceError;
use thiserror::Error;

/// Errors returned by the settings `validate` methods.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// A threshold was NaN, infinite or below zero.
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidThreshold {
        /// Name of the offending setting.
        field: &'static str,
        /// Threshold as supplied.
        value: f64,
    },
}

/// Errors returned by [`evaluate`](crate::evaluate) and
/// [`check_nearby`](crate::check_nearby).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotifyError {
    /// The user's location or a place failed validation.
    #[error(transparent)]
    InvalidPlace(#[from] PlaceError),
    /// The alert settings carried an unusable threshold.
    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),
}
