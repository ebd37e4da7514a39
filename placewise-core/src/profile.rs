//! Preference profiles: a user's inferred taste derived from history.
//!
//! Profiles are ephemeral. They are rebuilt from favourite and visited places
//! for every scoring session and never persisted by the core.

use std::collections::{BTreeSet, HashMap};

use geo::Coord;

use crate::{PriceLevel, lat_lon};

/// Search radius attached to a profile when none is configured.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Centre and radius of the area a user tends to frequent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferredLocation {
    /// Mean position of the user's favourite and visited places.
    pub centre: Coord<f64>,
    /// Radius, in kilometres, within which places earn a proximity bonus.
    pub radius_km: f64,
}

impl Default for PreferredLocation {
    fn default() -> Self {
        Self {
            centre: lat_lon(0.0, 0.0),
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

/// Category weights, visits, price habits and preferred area for one user.
///
/// An empty profile is the degenerate case: no weights, no visits, an
/// all-zero price histogram and the default location.
///
/// # Examples
/// ```
/// use placewise_core::{PreferenceProfile, PriceLevel};
///
/// let level = PriceLevel::try_from(1).expect("valid level");
/// let profile = PreferenceProfile::new()
///     .with_category_weight("cafe", 3)
///     .with_price_count(level, 5);
/// assert_eq!(profile.category_weight("cafe"), 3);
/// assert_eq!(profile.category_weight("bar"), 0);
/// assert_eq!(profile.price_total(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferenceProfile {
    category_weights: HashMap<String, u32>,
    visited: BTreeSet<String>,
    ratings: HashMap<String, f64>,
    price_histogram: [u32; PriceLevel::COUNT],
    location: PreferredLocation,
}

impl PreferenceProfile {
    /// Construct the degenerate, empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated weight for a category label; zero when unseen.
    #[must_use]
    pub fn category_weight(&self, label: &str) -> u32 {
        self.category_weights.get(label).copied().unwrap_or(0)
    }

    /// All category weights.
    #[must_use]
    pub const fn category_weights(&self) -> &HashMap<String, u32> {
        &self.category_weights
    }

    /// Add `amount` to a category's weight.
    pub fn add_category_weight(&mut self, label: &str, amount: u32) {
        let weight = self.category_weights.entry(label.to_owned()).or_insert(0);
        *weight = weight.saturating_add(amount);
    }

    /// Set a category weight while returning `self` for chaining.
    #[must_use]
    pub fn with_category_weight(mut self, label: impl Into<String>, weight: u32) -> Self {
        self.category_weights.insert(label.into(), weight);
        self
    }

    /// Identifiers of visited places in lexical order.
    #[must_use]
    pub const fn visited_ids(&self) -> &BTreeSet<String> {
        &self.visited
    }

    /// Whether the place with `id` has been visited.
    #[must_use]
    pub fn is_visited(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    /// Record a visit and the rating that represents it.
    pub fn record_visit(&mut self, id: &str, rating: f64) {
        self.visited.insert(id.to_owned());
        self.ratings.insert(id.to_owned(), rating);
    }

    /// Rating recorded for a visited place.
    #[must_use]
    pub fn rating_for(&self, id: &str) -> Option<f64> {
        self.ratings.get(id).copied()
    }

    /// Count of history entries per price tier, indexed `0..=4`.
    #[must_use]
    pub const fn price_histogram(&self) -> &[u32; PriceLevel::COUNT] {
        &self.price_histogram
    }

    /// Count of history entries at `level`.
    #[must_use]
    pub fn price_count(&self, level: PriceLevel) -> u32 {
        self.price_histogram.get(level.index()).copied().unwrap_or(0)
    }

    /// Total of all histogram buckets.
    #[must_use]
    pub fn price_total(&self) -> u32 {
        self.price_histogram
            .iter()
            .fold(0_u32, |acc, count| acc.saturating_add(*count))
    }

    /// Increment the histogram bucket for `level`.
    pub fn record_price(&mut self, level: PriceLevel) {
        if let Some(bucket) = self.price_histogram.get_mut(level.index()) {
            *bucket = bucket.saturating_add(1);
        }
    }

    /// Set a histogram bucket while returning `self` for chaining.
    #[must_use]
    pub fn with_price_count(mut self, level: PriceLevel, count: u32) -> Self {
        if let Some(bucket) = self.price_histogram.get_mut(level.index()) {
            *bucket = count;
        }
        self
    }

    /// Preferred centre and radius.
    #[must_use]
    pub const fn location(&self) -> PreferredLocation {
        self.location
    }

    /// Replace the preferred centre, keeping the radius.
    pub const fn set_centre(&mut self, centre: Coord<f64>) {
        self.location.centre = centre;
    }

    /// Replace the search radius while returning `self` for chaining.
    #[must_use]
    pub const fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.location.radius_km = radius_km;
        self
    }
}
