//! Score places against a preference profile.
//!
//! The `Scorer` trait assigns a relevance score to a [`Place`] given the
//! user's [`PreferenceProfile`] and the location the user is scoring from.

use geo::Coord;

use crate::{Place, PreferenceProfile};

/// Calculate a relevance score for a place.
///
/// Higher scores indicate a better match. Scores are only compared with one
/// another, so implementations need not normalise them into `0.0..=1.0`, but
/// they must be finite: use [`Scorer::sanitise`] to turn NaN or infinities
/// into `0.0` before they can corrupt an ordering.
///
/// Implementations must be `Send + Sync` so independent users can be ranked
/// in parallel.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use placewise_core::{Place, PreferenceProfile, Scorer, lat_lon};
///
/// struct RatingOnly;
///
/// impl Scorer for RatingOnly {
///     fn score(&self, place: &Place, _profile: &PreferenceProfile, _from: Coord<f64>) -> f64 {
///         Self::sanitise(place.rating)
///     }
/// }
///
/// let place = Place::new("p1", "Cafe", lat_lon(0.0, 0.0)).with_rating(4.0);
/// let score = RatingOnly.score(&place, &PreferenceProfile::new(), lat_lon(0.0, 0.0));
/// assert_eq!(score, 4.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `place` seen from `reference` according to `profile`.
    fn score(&self, place: &Place, profile: &PreferenceProfile, reference: Coord<f64>) -> f64;

    /// Replace non-finite scores with `0.0`; finite scores pass through.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if score.is_finite() { score } else { 0.0 }
    }
}
