//! Public configuration types for scoring and ranking.
#![forbid(unsafe_code)]

use crate::ScoreWeightsError;

/// Multipliers for the five additive terms of the weighted score.
///
/// The defaults sum to `1.0`, but the category term multiplies an unbounded
/// accumulated weight, so totals above `1.0` are expected for strong
/// preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ScoreWeights {
    /// Multiplier for the mean category affinity.
    pub category: f64,
    /// Multiplier for the public rating scaled into `0.0..=1.0`.
    pub rating: f64,
    /// Multiplier for the share of history at the place's price tier.
    pub price: f64,
    /// Multiplier for closeness relative to the profile radius.
    pub proximity: f64,
    /// Multiplier for the saturated review count.
    pub popularity: f64,
    /// Review count at which the popularity term reaches its maximum.
    pub review_saturation: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            category: 0.30,
            rating: 0.25,
            price: 0.15,
            proximity: 0.20,
            popularity: 0.10,
            review_saturation: 1000,
        }
    }
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a multiplier is non-finite or
    /// negative, or when `review_saturation` is zero.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        for (term, value) in self.terms() {
            if !value.is_finite() {
                return Err(ScoreWeightsError::NonFinite { term, value });
            }
            if value < 0.0 {
                return Err(ScoreWeightsError::Negative { term, value });
            }
        }
        if self.review_saturation == 0 {
            return Err(ScoreWeightsError::ZeroReviewSaturation);
        }
        Ok(self)
    }

    const fn terms(self) -> [(&'static str, f64); 5] {
        [
            ("category", self.category),
            ("rating", self.rating),
            ("price", self.price),
            ("proximity", self.proximity),
            ("popularity", self.popularity),
        ]
    }
}

/// Limits and radii used by the ranker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct RankerConfig {
    /// Number of recommendations returned when the caller does not choose.
    pub limit: usize,
    /// Number of daily recommendations returned when the caller does not choose.
    pub daily_limit: usize,
    /// Daily recommendations must lie within this many kilometres.
    pub daily_radius_km: f64,
    /// Size of the ranked pool the daily filter draws from.
    pub daily_pool: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            daily_limit: 3,
            daily_radius_km: 2.0,
            daily_pool: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_weights_are_valid() {
        assert!(ScoreWeights::default().validate().is_ok());
    }

    #[rstest]
    fn weights_reject_negative_terms() {
        let weights = ScoreWeights {
            price: -0.1,
            ..ScoreWeights::default()
        };
        let err = weights.validate().expect_err("negative price weight");
        assert!(matches!(err, ScoreWeightsError::Negative { term: "price", .. }));
    }

    #[rstest]
    fn weights_reject_non_finite_terms() {
        let weights = ScoreWeights {
            rating: f64::NAN,
            ..ScoreWeights::default()
        };
        let err = weights.validate().expect_err("NaN rating weight");
        assert!(matches!(err, ScoreWeightsError::NonFinite { term: "rating", .. }));
    }

    #[rstest]
    fn weights_reject_zero_saturation() {
        let weights = ScoreWeights {
            review_saturation: 0,
            ..ScoreWeights::default()
        };
        assert_eq!(
            weights.validate(),
            Err(ScoreWeightsError::ZeroReviewSaturation)
        );
    }
}
