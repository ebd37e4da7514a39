//! Great-circle distance and location helpers.
//!
//! All distances are kilometres computed with the Haversine formula on a
//! sphere of radius [`EARTH_RADIUS_KM`]. Callers validate coordinates before
//! measuring; the functions here do not check for NaN.

use geo::{Coord, Rect};

use crate::Place;

/// Earth radius used for every distance in the engine.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default padding, in degrees, applied by [`bounding_box`].
pub const DEFAULT_BOX_PADDING_DEG: f64 = 0.1;

/// Haversine distance in kilometres between two latitude/longitude pairs.
///
/// Symmetric, non-negative and exactly zero for identical inputs.
///
/// # Examples
/// ```
/// use placewise_core::haversine_km;
///
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.19).abs() < 0.5);
/// assert_eq!(haversine_km(41.0082, 28.9784, 41.0082, 28.9784), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();
    // Rounding can push `a` just past 1 for near-antipodal points.
    let a = (half_lat * half_lat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * half_lon * half_lon)
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Haversine distance in kilometres between two coordinates.
///
/// # Examples
/// ```
/// use placewise_core::{distance_km, lat_lon};
///
/// let d = distance_km(lat_lon(0.0, 0.0), lat_lon(1.0, 0.0));
/// assert!((d - 111.19).abs() < 0.5);
/// ```
#[must_use]
pub fn distance_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    haversine_km(from.y, from.x, to.y, to.x)
}

/// Keep the places within `radius_km` of `centre`, preserving input order.
///
/// The boundary is inclusive.
#[must_use]
pub fn filter_within<'a>(places: &'a [Place], centre: Coord<f64>, radius_km: f64) -> Vec<&'a Place> {
    places
        .iter()
        .filter(|place| distance_km(centre, place.location) <= radius_km)
        .collect()
}

/// Order places nearest-first relative to `centre`.
///
/// Equidistant places keep their input order.
///
/// # Examples
/// ```
/// use placewise_core::{Place, lat_lon, sort_by_distance};
///
/// let far = Place::new("far", "Far", lat_lon(0.0, 1.0));
/// let near = Place::new("near", "Near", lat_lon(0.0, 0.1));
/// let places = [far, near];
/// let sorted = sort_by_distance(&places, lat_lon(0.0, 0.0));
/// assert_eq!(sorted[0].id, "near");
/// ```
#[must_use]
pub fn sort_by_distance(places: &[Place], centre: Coord<f64>) -> Vec<&Place> {
    let mut measured: Vec<(f64, &Place)> = places
        .iter()
        .map(|place| (distance_km(centre, place.location), place))
        .collect();
    measured.sort_by(|(lhs, _), (rhs, _)| lhs.total_cmp(rhs));
    measured.into_iter().map(|(_, place)| place).collect()
}

/// Arithmetic mean of a set of coordinates.
///
/// Returns `None` for an empty input.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the centroid is a mean over floating-point degrees"
)]
pub fn centre_point(coords: &[Coord<f64>]) -> Option<Coord<f64>> {
    if coords.is_empty() {
        return None;
    }
    let (sum, count) = coords
        .iter()
        .fold((Coord { x: 0.0, y: 0.0 }, 0.0_f64), |(acc, n), coord| {
            (
                Coord {
                    x: acc.x + coord.x,
                    y: acc.y + coord.y,
                },
                n + 1.0,
            )
        });
    Some(Coord {
        x: sum.x / count,
        y: sum.y / count,
    })
}

/// Smallest rectangle enclosing `coords`, grown by `padding_deg` on each side.
///
/// Returns `None` for an empty input. The rectangle is not clamped to valid
/// WGS84 bounds; map collaborators clip it as needed.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "padding is added to floating-point degrees"
)]
pub fn bounding_box(coords: &[Coord<f64>], padding_deg: f64) -> Option<Rect<f64>> {
    let first = coords.first()?;
    let (min, max) = coords
        .iter()
        .fold((*first, *first), |(min, max), coord| {
            (
                Coord {
                    x: min.x.min(coord.x),
                    y: min.y.min(coord.y),
                },
                Coord {
                    x: max.x.max(coord.x),
                    y: max.y.max(coord.y),
                },
            )
        });
    Some(Rect::new(
        Coord {
            x: min.x - padding_deg,
            y: min.y - padding_deg,
        },
        Coord {
            x: max.x + padding_deg,
            y: max.y + padding_deg,
        },
    ))
}
