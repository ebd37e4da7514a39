//! Rank candidate places for a user.
//!
//! The ranker drops places the user has already visited, scores the rest
//! with a [`Scorer`] and returns them best-first. Equal scores keep their
//! input order.

use std::cmp::Ordering;

use geo::Coord;
use log::debug;
use placewise_core::{
    Place, PlaceError, PreferenceProfile, ScoredPlace, Scorer, distance_km, validate_all,
    validate_reference,
};

use crate::{RankerConfig, WeightedScorer};

/// Scores and orders candidate places.
///
/// # Examples
/// ```
/// use placewise_core::{Place, PreferenceProfile, lat_lon};
/// use placewise_scorer::Ranker;
///
/// let ranker: Ranker = Ranker::default();
/// let candidates = [
///     Place::new("far", "Far", lat_lon(0.0, 0.03)).with_rating(4.0),
///     Place::new("near", "Near", lat_lon(0.0, 0.001)).with_rating(4.0),
/// ];
/// let ranked = ranker
///     .recommend(&candidates, &PreferenceProfile::new(), lat_lon(0.0, 0.0))
///     .expect("valid candidates");
/// assert_eq!(ranked[0].place.id, "near");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ranker<S = WeightedScorer> {
    scorer: S,
    config: RankerConfig,
}

impl<S: Scorer> Ranker<S> {
    /// Build a ranker from a scorer and limits.
    #[must_use]
    pub const fn new(scorer: S, config: RankerConfig) -> Self {
        Self { scorer, config }
    }

    /// Limits in use.
    #[must_use]
    pub const fn config(&self) -> RankerConfig {
        self.config
    }

    /// Score unvisited candidates and return the best `limit`, best first.
    ///
    /// # Errors
    /// Returns [`PlaceError`] when `reference` or any candidate is invalid.
    pub fn rank(
        &self,
        candidates: &[Place],
        profile: &PreferenceProfile,
        reference: Coord<f64>,
        limit: usize,
    ) -> Result<Vec<ScoredPlace>, PlaceError> {
        validate_reference(reference)?;
        validate_all(candidates)?;

        let mut scored: Vec<ScoredPlace> = candidates
            .iter()
            .filter(|place| !profile.is_visited(&place.id))
            .map(|place| ScoredPlace {
                score: self.scorer.score(place, profile, reference),
                place: place.clone(),
            })
            .collect();
        let unvisited = scored.len();
        scored.sort_by(|lhs, rhs| rhs.score.partial_cmp(&lhs.score).unwrap_or(Ordering::Equal));
        scored.truncate(limit);

        debug!(
            "ranked {unvisited} of {} candidates, returning {}",
            candidates.len(),
            scored.len()
        );
        Ok(scored)
    }

    /// [`Ranker::rank`] with the configured default limit.
    ///
    /// # Errors
    /// Returns [`PlaceError`] when `reference` or any candidate is invalid.
    pub fn recommend(
        &self,
        candidates: &[Place],
        profile: &PreferenceProfile,
        reference: Coord<f64>,
    ) -> Result<Vec<ScoredPlace>, PlaceError> {
        self.rank(candidates, profile, reference, self.config.limit)
    }

    /// Best-ranked places close enough to visit today.
    ///
    /// Ranks a pool of [`RankerConfig::daily_pool`] places, keeps those within
    /// [`RankerConfig::daily_radius_km`] of `reference` and returns at most
    /// `limit` of them. Fewer nearby places simply yield a shorter list.
    ///
    /// # Errors
    /// Returns [`PlaceError`] when `reference` or any candidate is invalid.
    pub fn daily_recommendations(
        &self,
        candidates: &[Place],
        profile: &PreferenceProfile,
        reference: Coord<f64>,
        limit: usize,
    ) -> Result<Vec<ScoredPlace>, PlaceError> {
        let pool = self.rank(candidates, profile, reference, self.config.daily_pool)?;
        let radius = self.config.daily_radius_km;
        let daily: Vec<ScoredPlace> = pool
            .into_iter()
            .filter(|scored| distance_km(reference, scored.place.location) <= radius)
            .take(limit)
            .collect();
        debug!("selected {} daily recommendations within {radius} km", daily.len());
        Ok(daily)
    }
}

/// Rank `candidates` with the default weighted scorer.
///
/// # Errors
/// Returns [`PlaceError`] when `reference` or any candidate is invalid.
pub fn rank(
    candidates: &[Place],
    profile: &PreferenceProfile,
    reference: Coord<f64>,
    limit: usize,
) -> Result<Vec<ScoredPlace>, PlaceError> {
    Ranker::<WeightedScorer>::default().rank(candidates, profile, reference, limit)
}

/// Daily recommendations with the default weighted scorer and limits.
///
/// # Errors
/// Returns [`PlaceError`] when `reference` or any candidate is invalid.
pub fn daily_recommendations(
    candidates: &[Place],
    profile: &PreferenceProfile,
    reference: Coord<f64>,
    limit: usize,
) -> Result<Vec<ScoredPlace>, PlaceError> {
    Ranker::<WeightedScorer>::default().daily_recommendations(candidates, profile, reference, limit)
}
