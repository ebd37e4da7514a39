//! Test-only helpers shared by unit, behaviour and property tests.

use geo::Coord;

use crate::{Place, PreferenceProfile, Scorer, lat_lon};

/// Build a place at the given latitude and longitude, named after its id.
#[must_use]
pub fn place_at(id: &str, latitude: f64, longitude: f64) -> Place {
    Place::new(id, id, lat_lon(latitude, longitude))
}

/// Test `Scorer` that ranks purely by review count.
///
/// Useful where a test needs a predictable order independent of the
/// weighting formula.
#[derive(Debug, Copy, Clone, Default)]
pub struct ReviewCountScorer;

impl Scorer for ReviewCountScorer {
    fn score(&self, place: &Place, _profile: &PreferenceProfile, _reference: Coord<f64>) -> f64 {
        f64::from(place.reviews)
    }
}

/// Test `Scorer` that gives every place the same score.
#[derive(Debug, Copy, Clone, Default)]
pub struct ConstantScorer(pub f64);

impl Scorer for ConstantScorer {
    fn score(&self, _place: &Place, _profile: &PreferenceProfile, _reference: Coord<f64>) -> f64 {
        Self::sanitise(self.0)
    }
}
