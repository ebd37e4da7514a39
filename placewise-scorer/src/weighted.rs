//! The five-term weighted relevance scorer.
//!
//! A place's score is the sum of category affinity, rating, price affinity,
//! proximity and popularity, each scaled by its [`ScoreWeights`] multiplier.
//! Category affinity multiplies an unbounded accumulated weight, so totals
//! above `1.0` are normal for users with strong preferences; scores are only
//! used for relative ordering.

#![forbid(unsafe_code)]

use geo::Coord;
use placewise_core::{Place, PreferenceProfile, Scorer, distance_km, place::MAX_RATING};

use crate::{ScoreWeights, ScoreWeightsError};

/// Per-term contributions to a weighted score, already multiplied by their
/// weights.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Mean category weight times the category multiplier.
    pub category: f64,
    /// Scaled public rating.
    pub rating: f64,
    /// Share of history at the place's price tier.
    pub price: f64,
    /// Closeness within the profile radius.
    pub proximity: f64,
    /// Saturated review count.
    pub popularity: f64,
}

impl ScoreBreakdown {
    /// Sum of all five terms.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "the score is an additive sum")]
    pub const fn total(&self) -> f64 {
        self.category + self.rating + self.price + self.proximity + self.popularity
    }
}

/// Scorer combining category, rating, price, proximity and popularity.
///
/// # Examples
/// ```
/// use placewise_core::{Place, PreferenceProfile, Scorer, lat_lon};
/// use placewise_scorer::WeightedScorer;
///
/// let scorer = WeightedScorer::default();
/// let place = Place::new("p1", "Cafe", lat_lon(0.0, 0.0)).with_rating(5.0);
/// let score = scorer.score(&place, &PreferenceProfile::new(), lat_lon(0.0, 0.0));
/// // Full rating plus full proximity.
/// assert!((score - 0.45).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedScorer {
    weights: ScoreWeights,
}

impl WeightedScorer {
    /// Build a scorer after validating `weights`.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when the weights are unusable.
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score each term separately.
    #[must_use]
    pub fn components(
        &self,
        place: &Place,
        profile: &PreferenceProfile,
        reference: Coord<f64>,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            category: self.category_term(place, profile),
            rating: self.rating_term(place),
            price: self.price_term(place, profile),
            proximity: self.proximity_term(place, profile, reference),
            popularity: self.popularity_term(place),
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "category affinity is a mean of weights"
    )]
    fn category_term(&self, place: &Place, profile: &PreferenceProfile) -> f64 {
        let (sum, count) = place
            .categories
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sum, count), label| {
                (sum + f64::from(profile.category_weight(label)), count + 1.0)
            });
        if count == 0.0 {
            return 0.0;
        }
        sum / count * self.weights.category
    }

    #[expect(clippy::float_arithmetic, reason = "rating is scaled into 0..=1")]
    const fn rating_term(&self, place: &Place) -> f64 {
        place.rating / MAX_RATING * self.weights.rating
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "price affinity is a histogram share"
    )]
    fn price_term(&self, place: &Place, profile: &PreferenceProfile) -> f64 {
        let total = profile.price_total();
        match place.price_level {
            Some(level) if total > 0 => {
                f64::from(profile.price_count(level)) / f64::from(total) * self.weights.price
            }
            _ => 0.0,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "proximity decays linearly with distance"
    )]
    fn proximity_term(
        &self,
        place: &Place,
        profile: &PreferenceProfile,
        reference: Coord<f64>,
    ) -> f64 {
        let radius = profile.location().radius_km;
        if !radius.is_finite() || radius <= 0.0 {
            return 0.0;
        }
        let distance = distance_km(reference, place.location);
        (1.0 - distance / radius).max(0.0) * self.weights.proximity
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "popularity saturates at a review count"
    )]
    fn popularity_term(&self, place: &Place) -> f64 {
        if self.weights.review_saturation == 0 {
            return 0.0;
        }
        let ratio = f64::from(place.reviews) / f64::from(self.weights.review_saturation);
        ratio.min(1.0) * self.weights.popularity
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, place: &Place, profile: &PreferenceProfile, reference: Coord<f64>) -> f64 {
        Self::sanitise(self.components(place, profile, reference).total())
    }
}
