//! Coordinate validation and wire helpers.
//!
//! Coordinates are `geo::Coord<f64>` values in WGS84 degrees with
//! `x = longitude` and `y = latitude`, matching the rest of the `geo`
//! ecosystem. Every entry point that measures distance validates its
//! coordinates first so that NaN never reaches a ranked result.

use geo::Coord;
use thiserror::Error;

/// Largest accepted absolute latitude in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Largest accepted absolute longitude in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Smallest accepted latitude in degrees.
pub const MIN_LATITUDE: f64 = -90.0;

/// Smallest accepted longitude in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;

/// Errors returned by [`validate_coordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinate ({latitude}, {longitude}) is not finite")]
    NonFinite {
        /// Latitude as supplied.
        latitude: f64,
        /// Longitude as supplied.
        longitude: f64,
    },
    /// Latitude fell outside `-90.0..=90.0`.
    #[error("latitude {latitude} is outside -90..=90")]
    LatitudeOutOfRange {
        /// Latitude as supplied.
        latitude: f64,
    },
    /// Longitude fell outside `-180.0..=180.0`.
    #[error("longitude {longitude} is outside -180..=180")]
    LongitudeOutOfRange {
        /// Longitude as supplied.
        longitude: f64,
    },
}

/// Check that a coordinate is finite and within WGS84 bounds.
///
/// # Errors
/// Returns [`CoordinateError`] describing the first violated bound.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placewise_core::validate_coordinate;
///
/// assert!(validate_coordinate(Coord { x: 28.9784, y: 41.0082 }).is_ok());
/// assert!(validate_coordinate(Coord { x: f64::NAN, y: 0.0 }).is_err());
/// ```
pub fn validate_coordinate(coord: Coord<f64>) -> Result<Coord<f64>, CoordinateError> {
    let (latitude, longitude) = (coord.y, coord.x);
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(CoordinateError::NonFinite {
            latitude,
            longitude,
        });
    }
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(CoordinateError::LatitudeOutOfRange { latitude });
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(CoordinateError::LongitudeOutOfRange { longitude });
    }
    Ok(coord)
}

/// Build a coordinate from latitude and longitude, in that order.
///
/// # Examples
/// ```
/// use placewise_core::lat_lon;
///
/// let coord = lat_lon(41.0, 29.0);
/// assert_eq!((coord.y, coord.x), (41.0, 29.0));
/// ```
#[must_use]
pub const fn lat_lon(latitude: f64, longitude: f64) -> Coord<f64> {
    Coord {
        x: longitude,
        y: latitude,
    }
}

/// Serde adapter encoding a coordinate as `{"latitude": .., "longitude": ..}`.
///
/// Use with `#[serde(with = "placewise_core::coordinate::lat_lon_serde")]`.
#[cfg(feature = "serde")]
pub mod lat_lon_serde {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct LatLon {
        latitude: f64,
        longitude: f64,
    }

    /// Serialise `coord` as a latitude/longitude object.
    ///
    /// # Errors
    /// Propagates serialiser failures.
    pub fn serialize<S>(coord: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        LatLon {
            latitude: coord.y,
            longitude: coord.x,
        }
        .serialize(serializer)
    }

    /// Deserialise a latitude/longitude object into a coordinate.
    ///
    /// # Errors
    /// Fails when either field is missing or not a number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Coord<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = LatLon::deserialize(deserializer)?;
        Ok(Coord {
            x: raw.longitude,
            y: raw.latitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(41.0082, 28.9784)]
    fn accepts_valid_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(validate_coordinate(lat_lon(latitude, longitude)).is_ok());
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(f64::NEG_INFINITY, 0.0)]
    fn rejects_non_finite(#[case] latitude: f64, #[case] longitude: f64) {
        let err = validate_coordinate(lat_lon(latitude, longitude)).expect_err("non-finite");
        assert!(matches!(err, CoordinateError::NonFinite { .. }));
    }

    #[rstest]
    #[case(90.5)]
    #[case(-90.5)]
    fn rejects_out_of_range_latitude(#[case] latitude: f64) {
        let err = validate_coordinate(lat_lon(latitude, 0.0)).expect_err("latitude out of range");
        assert!(matches!(err, CoordinateError::LatitudeOutOfRange { .. }));
    }

    #[rstest]
    fn rejects_out_of_range_longitude() {
        let err = validate_coordinate(lat_lon(0.0, -181.0)).expect_err("longitude too small");
        assert!(matches!(err, CoordinateError::LongitudeOutOfRange { .. }));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn lat_lon_serde_uses_named_fields() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "lat_lon_serde")]
            at: Coord<f64>,
        }

        let decoded: Wrapper =
            serde_json::from_str(r#"{"at":{"latitude":41.5,"longitude":29.25}}"#)
                .expect("decode wrapper");
        assert_eq!(decoded.at, lat_lon(41.5, 29.25));

        let encoded = serde_json::to_value(&decoded).expect("encode wrapper");
        assert_eq!(encoded["at"]["latitude"], 41.5);
        assert_eq!(encoded["at"]["longitude"], 29.25);
    }
}
