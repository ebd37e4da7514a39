//! Per-place notification decisions.

use placewise_core::Place;

/// Why a place did not qualify for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SuppressReason {
    /// The place lies beyond the distance threshold.
    TooFar,
    /// The place's rating is below the minimum.
    RatingBelowThreshold,
    /// The user has already been there.
    AlreadyVisited,
    /// The place was alerted on within the minimum interval.
    NotifiedTooRecently,
}

/// Outcome of evaluating one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Outcome {
    /// The dispatcher should alert the user.
    Notify,
    /// No alert, for the given reason.
    Suppressed(SuppressReason),
}

/// Decision for one place, carrying what the dispatcher needs to compose an
/// alert.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NotificationEligibility {
    /// Identifier of the evaluated place.
    pub place_id: String,
    /// Display name of the place.
    pub name: String,
    /// Distance from the user, in kilometres.
    pub distance_km: f64,
    /// Public rating of the place.
    pub rating: f64,
    /// Public review count of the place.
    pub reviews: u32,
    /// The decision.
    pub outcome: Outcome,
}

impl NotificationEligibility {
    pub(crate) fn new(place: &Place, distance_km: f64, outcome: Outcome) -> Self {
        Self {
            place_id: place.id.clone(),
            name: place.name.clone(),
            distance_km,
            rating: place.rating,
            reviews: place.reviews,
            outcome,
        }
    }

    /// Whether the dispatcher should alert for this place.
    #[must_use]
    pub const fn should_notify(&self) -> bool {
        matches!(self.outcome, Outcome::Notify)
    }

    /// Reason for suppression, or `None` when the place qualifies.
    #[must_use]
    pub const fn reason(&self) -> Option<SuppressReason> {
        match self.outcome {
            Outcome::Notify => None,
            Outcome::Suppressed(reason) => Some(reason),
        }
    }
}
