//! Venue records consumed by the scoring core.
//!
//! A [`Place`] arrives from the places-search collaborator or from persisted
//! favourites. The core treats it as read-only; [`Place::validate`] is the
//! boundary check every ranking and notification entry point runs first.

use geo::Coord;
use thiserror::Error;

use crate::coordinate::{CoordinateError, validate_coordinate};

/// Highest rating a place can carry.
pub const MAX_RATING: f64 = 5.0;

/// Price tier from 0 (free) to 4 (very expensive).
///
/// # Examples
/// ```
/// use placewise_core::PriceLevel;
///
/// let level = PriceLevel::try_from(2).expect("valid level");
/// assert_eq!(level.get(), 2);
/// assert!(PriceLevel::try_from(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct PriceLevel(u8);

impl PriceLevel {
    /// Number of distinct price tiers.
    pub const COUNT: usize = 5;

    /// Return the tier as a number in `0..=4`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Return the tier as an index into a histogram of [`Self::COUNT`] buckets.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Error returned when a price tier is outside `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("price level {0} is outside 0..=4")]
pub struct PriceLevelError(pub u8);

impl TryFrom<u8> for PriceLevel {
    type Error = PriceLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(PriceLevelError(value))
        }
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.0
    }
}

/// A venue that may be recommended or trigger a proximity notification.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. On the wire
/// the location is an object with `latitude` and `longitude` fields and the
/// remaining keys are camel-cased; `types` is accepted as an alias for
/// `categories`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Place {
    /// Unique identifier assigned by the places source.
    pub id: String,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Postal address, possibly empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// Geographic position.
    #[cfg_attr(feature = "serde", serde(with = "crate::coordinate::lat_lon_serde"))]
    pub location: Coord<f64>,
    /// Average public rating in `0.0..=5.0`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: f64,
    /// Number of public reviews.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reviews: u32,
    /// Category labels in source order.
    #[cfg_attr(feature = "serde", serde(default, alias = "types"))]
    pub categories: Vec<String>,
    /// Price tier, when the source knows it.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub price_level: Option<PriceLevel>,
    /// The user's own rating, overriding [`Place::rating`] for visited places.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub user_rating: Option<f64>,
    /// Whether the user has marked the place as a favourite.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_favorite: bool,
}

/// Errors returned by [`Place::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaceError {
    /// The identifier was empty or whitespace.
    #[error("place identifier must not be empty")]
    MissingId,
    /// The location failed coordinate validation.
    #[error("place {id} has an invalid location: {source}")]
    InvalidLocation {
        /// Identifier of the offending place.
        id: String,
        /// Underlying coordinate failure.
        #[source]
        source: CoordinateError,
    },
    /// The public rating was non-finite or outside `0.0..=5.0`.
    #[error("place {id} has rating {rating}, expected 0..=5")]
    InvalidRating {
        /// Identifier of the offending place.
        id: String,
        /// Rating as supplied.
        rating: f64,
    },
    /// The user rating was non-finite or outside `0.0..=5.0`.
    #[error("place {id} has user rating {rating}, expected 0..=5")]
    InvalidUserRating {
        /// Identifier of the offending place.
        id: String,
        /// Rating as supplied.
        rating: f64,
    },
    /// A reference location supplied alongside the places was invalid.
    #[error("reference location is invalid: {0}")]
    InvalidReference(#[source] CoordinateError),
}

impl Place {
    /// Construct a place with no rating, reviews, categories or price.
    ///
    /// # Examples
    /// ```
    /// use placewise_core::{Place, lat_lon};
    ///
    /// let place = Place::new("p1", "Cafe", lat_lon(41.0, 29.0));
    /// assert_eq!(place.id, "p1");
    /// assert!(place.categories.is_empty());
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            location,
            rating: 0.0,
            reviews: 0,
            categories: Vec::new(),
            price_level: None,
            user_rating: None,
            is_favorite: false,
        }
    }

    /// Set the public rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the review count.
    #[must_use]
    pub const fn with_reviews(mut self, reviews: u32) -> Self {
        self.reviews = reviews;
        self
    }

    /// Replace the category labels.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the price tier.
    #[must_use]
    pub const fn with_price_level(mut self, level: PriceLevel) -> Self {
        self.price_level = Some(level);
        self
    }

    /// Set the user's own rating.
    #[must_use]
    pub const fn with_user_rating(mut self, rating: f64) -> Self {
        self.user_rating = Some(rating);
        self
    }

    /// Set the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Mark the place as a favourite.
    #[must_use]
    pub const fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Rating that stands for the user's opinion: the override when present,
    /// otherwise the public rating.
    #[must_use]
    pub fn effective_rating(&self) -> f64 {
        self.user_rating.unwrap_or(self.rating)
    }

    /// Check the fields the scoring core relies on.
    ///
    /// # Errors
    /// Returns [`PlaceError`] for an empty identifier, an invalid location or
    /// a rating outside `0.0..=5.0`.
    pub fn validate(&self) -> Result<(), PlaceError> {
        if self.id.trim().is_empty() {
            return Err(PlaceError::MissingId);
        }
        validate_coordinate(self.location).map_err(|source| PlaceError::InvalidLocation {
            id: self.id.clone(),
            source,
        })?;
        if !is_valid_rating(self.rating) {
            return Err(PlaceError::InvalidRating {
                id: self.id.clone(),
                rating: self.rating,
            });
        }
        if let Some(rating) = self.user_rating
            && !is_valid_rating(rating)
        {
            return Err(PlaceError::InvalidUserRating {
                id: self.id.clone(),
                rating,
            });
        }
        Ok(())
    }
}

fn is_valid_rating(rating: f64) -> bool {
    rating.is_finite() && (0.0..=MAX_RATING).contains(&rating)
}

/// Validate every place in `places`, stopping at the first failure.
///
/// # Errors
/// Propagates the first [`PlaceError`] encountered.
pub fn validate_all<'a, I>(places: I) -> Result<(), PlaceError>
where
    I: IntoIterator<Item = &'a Place>,
{
    places.into_iter().try_for_each(|place| {
        place.validate().inspect_err(|err| {
            log::warn!("rejecting place data: {err}");
        })
    })
}

/// Validate a reference location supplied with a ranking or notification call.
///
/// # Errors
/// Returns [`PlaceError::InvalidReference`] when the coordinate is unusable.
pub fn validate_reference(location: Coord<f64>) -> Result<Coord<f64>, PlaceError> {
    validate_coordinate(location).map_err(|source| {
        log::warn!("rejecting reference location: {source}");
        PlaceError::InvalidReference(source)
    })
}

/// A place annotated with its relevance score.
///
/// Scores are only meaningful relative to other scores from the same call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredPlace {
    /// The scored place.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub place: Place,
    /// Composite relevance score; higher is better.
    pub score: f64,
}
