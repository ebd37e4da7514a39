//! Derive a preference profile from a user's favourite and visited places.

use std::collections::HashSet;

use geo::Coord;
use log::debug;
use placewise_core::{Place, PlaceError, PreferenceProfile, centre_point, validate_all};

/// Extra category weight granted to places in the favourites list.
pub const FAVORITE_BONUS: u32 = 2;

/// Build a [`PreferenceProfile`] from history.
///
/// Places are visited in favourites-then-visited order and deduplicated by
/// identifier, so a place present in both lists contributes its categories,
/// price tier and position once. Each category label adds `1`, plus
/// [`FAVORITE_BONUS`] when the place appears in `favorites`. Ratings are
/// recorded for every entry of `visited` using the user's override when
/// present; the first entry for an identifier wins.
///
/// Empty history yields the degenerate profile.
///
/// # Errors
/// Returns [`PlaceError`] when any history entry fails validation.
///
/// # Examples
/// ```
/// use placewise_core::{Place, lat_lon};
/// use placewise_scorer::build_profile;
///
/// let cafe = Place::new("c1", "Kahve", lat_lon(41.0, 29.0)).with_categories(["cafe"]);
/// let profile = build_profile(&[cafe], &[]).expect("valid history");
/// assert_eq!(profile.category_weight("cafe"), 3);
/// ```
pub fn build_profile(
    favorites: &[Place],
    visited: &[Place],
) -> Result<PreferenceProfile, PlaceError> {
    validate_all(favorites.iter().chain(visited))?;

    let favorite_ids: HashSet<&str> = favorites.iter().map(|place| place.id.as_str()).collect();
    let mut seen = HashSet::new();
    let unique: Vec<&Place> = favorites
        .iter()
        .chain(visited)
        .filter(|place| seen.insert(place.id.as_str()))
        .collect();

    let mut profile = PreferenceProfile::new();
    for place in &unique {
        let amount = if favorite_ids.contains(place.id.as_str()) {
            1 + FAVORITE_BONUS
        } else {
            1
        };
        for label in &place.categories {
            profile.add_category_weight(label, amount);
        }
        if let Some(level) = place.price_level {
            profile.record_price(level);
        }
    }

    let coords: Vec<Coord<f64>> = unique.iter().map(|place| place.location).collect();
    if let Some(centre) = centre_point(&coords) {
        profile.set_centre(centre);
    }

    for place in visited {
        if !profile.is_visited(&place.id) {
            profile.record_visit(&place.id, place.effective_rating());
        }
    }

    debug!(
        "built preference profile from {} favourites and {} visits ({} distinct places, {} categories)",
        favorites.len(),
        visited.len(),
        unique.len(),
        profile.category_weights().len()
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use placewise_core::{DEFAULT_RADIUS_KM, PriceLevel, lat_lon};
    use rstest::{fixture, rstest};

    fn level(raw: u8) -> PriceLevel {
        PriceLevel::try_from(raw).expect("valid price level")
    }

    #[fixture]
    fn cafe() -> Place {
        Place::new("cafe", "Kahve", lat_lon(40.0, 28.0))
            .with_categories(["cafe", "bakery"])
            .with_rating(4.0)
            .with_price_level(level(1))
    }

    #[fixture]
    fn museum() -> Place {
        Place::new("museum", "Muze", lat_lon(42.0, 30.0))
            .with_categories(["museum"])
            .with_rating(4.8)
            .with_user_rating(3.5)
    }

    #[rstest]
    fn empty_history_is_degenerate() {
        let profile = build_profile(&[], &[]).expect("empty history");
        assert_eq!(profile, PreferenceProfile::new());
        assert_eq!(profile.location().centre, lat_lon(0.0, 0.0));
        assert_eq!(profile.location().radius_km, DEFAULT_RADIUS_KM);
    }

    #[rstest]
    fn favourites_earn_the_bonus(cafe: Place, museum: Place) {
        let profile = build_profile(&[cafe], &[museum]).expect("valid history");
        assert_eq!(profile.category_weight("cafe"), 3);
        assert_eq!(profile.category_weight("bakery"), 3);
        assert_eq!(profile.category_weight("museum"), 1);
    }

    #[rstest]
    fn shared_places_count_once(cafe: Place) {
        let profile = build_profile(&[cafe.clone()], &[cafe]).expect("valid history");
        assert_eq!(profile.category_weight("cafe"), 3);
        assert_eq!(profile.price_histogram(), &[0, 1, 0, 0, 0]);
        assert_eq!(profile.location().centre, lat_lon(40.0, 28.0));
        assert!(profile.is_visited("cafe"));
    }

    #[rstest]
    fn visits_use_the_user_override(cafe: Place, museum: Place) {
        let profile = build_profile(&[], &[cafe, museum]).expect("valid history");
        assert_eq!(profile.rating_for("cafe"), Some(4.0));
        assert_eq!(profile.rating_for("museum"), Some(3.5));
        assert_eq!(profile.visited_ids().len(), 2);
    }

    #[rstest]
    fn favourites_are_not_visits(cafe: Place) {
        let profile = build_profile(&[cafe], &[]).expect("valid history");
        assert!(!profile.is_visited("cafe"));
        assert!(profile.rating_for("cafe").is_none());
    }

    #[rstest]
    fn centroid_averages_distinct_places(cafe: Place, museum: Place) {
        let profile = build_profile(&[cafe], &[museum]).expect("valid history");
        assert_eq!(profile.location().centre, lat_lon(41.0, 29.0));
    }

    #[rstest]
    fn places_without_price_leave_histogram_alone(museum: Place) {
        let profile = build_profile(&[museum], &[]).expect("valid history");
        assert_eq!(profile.price_total(), 0);
    }

    #[rstest]
    fn invalid_history_is_rejected(cafe: Place) {
        let broken = Place {
            location: lat_lon(f64::NAN, 0.0),
            ..cafe.clone()
        };
        let result = build_profile(&[cafe], &[broken]);
        assert!(matches!(result, Err(PlaceError::InvalidLocation { .. })));
    }
}
