//! Core domain types for the Placewise recommendation engine.
//!
//! The crate defines the read-only [`Place`] record, the derived
//! [`PreferenceProfile`], great-circle distance helpers and the [`Scorer`]
//! seam. Everything here is pure and synchronous; persistence, place search
//! and notification delivery belong to the callers.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coordinate;
pub mod distance;
pub mod place;
pub mod profile;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use coordinate::{CoordinateError, lat_lon, validate_coordinate};
pub use distance::{
    DEFAULT_BOX_PADDING_DEG, EARTH_RADIUS_KM, bounding_box, centre_point, distance_km,
    filter_within, haversine_km, sort_by_distance,
};
pub use place::{
    Place, PlaceError, PriceLevel, PriceLevelError, ScoredPlace, validate_all, validate_reference,
};
pub use profile::{DEFAULT_RADIUS_KM, PreferenceProfile, PreferredLocation};
pub use scorer::Scorer;
