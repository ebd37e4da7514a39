//! Decide which places warrant a proximity alert.
//!
//! Both checks are pure: they read the user's position, the places and a
//! snapshot of settings and history, and return one decision per place. The
//! caller dispatches the alerts and persists the updated ledger.

use std::collections::BTreeSet;

use geo::Coord;
use log::debug;
use placewise_core::{Place, distance_km, validate_all, validate_reference};

use crate::{
    NearbyAlertSettings, NotificationEligibility, NotificationLedger, NotificationSettings,
    NotifyError, Outcome, SuppressReason,
};

/// Evaluate tracked favourites against the user's alert settings.
///
/// A place qualifies when it lies within [`NotificationSettings::distance_km`]
/// and at least [`NotificationSettings::min_minutes_between`] minutes have
/// passed since its last alert. Places absent from `ledger` count as last
/// alerted at epoch zero. Disabled settings yield no decisions.
///
/// # Errors
/// Returns [`NotifyError::InvalidSettings`] when the distance threshold is
/// unusable and [`NotifyError::InvalidPlace`] when `current` or any tracked
/// place is invalid.
///
/// # Examples
/// ```
/// use placewise_core::{Place, lat_lon};
/// use placewise_notify::{NotificationLedger, NotificationSettings, evaluate};
///
/// let cafe = Place::new("c1", "Kahve", lat_lon(0.0, 0.001));
/// let decisions = evaluate(
///     lat_lon(0.0, 0.0),
///     &[cafe],
///     &NotificationSettings::default(),
///     &NotificationLedger::new(),
///     1_700_000_000_000,
/// )
/// .expect("valid input");
/// assert!(decisions[0].should_notify());
/// ```
pub fn evaluate(
    current: Coord<f64>,
    tracked: &[Place],
    settings: &NotificationSettings,
    ledger: &NotificationLedger,
    now_ms: u64,
) -> Result<Vec<NotificationEligibility>, NotifyError> {
    if !settings.enabled {
        debug!("favourite alerts disabled; skipping {} places", tracked.len());
        return Ok(Vec::new());
    }
    settings.validate()?;
    validate_reference(current)?;
    validate_all(tracked)?;

    let min_interval = settings.min_interval_ms();
    let decisions: Vec<NotificationEligibility> = tracked
        .iter()
        .map(|place| {
            let distance = distance_km(current, place.location);
            let outcome = if beyond(distance, settings.distance_km) {
                Outcome::Suppressed(SuppressReason::TooFar)
            } else if now_ms.saturating_sub(ledger.last_notified(&place.id).unwrap_or(0))
                < min_interval
            {
                Outcome::Suppressed(SuppressReason::NotifiedTooRecently)
            } else {
                Outcome::Notify
            };
            NotificationEligibility::new(place, distance, outcome)
        })
        .collect();

    debug!(
        "evaluated {} favourites, {} eligible",
        decisions.len(),
        decisions.iter().filter(|decision| decision.should_notify()).count()
    );
    Ok(decisions)
}

/// Evaluate arbitrary places for the "interesting place nearby" alert.
///
/// Checks run in order: already visited, then distance, then rating. The
/// first failing check names the suppression reason. Disabled settings yield
/// no decisions. This check has no rate limit of its own.
///
/// # Errors
/// Returns [`NotifyError::InvalidSettings`] when a threshold is unusable and
/// [`NotifyError::InvalidPlace`] when `current` or any place is invalid.
pub fn check_nearby(
    current: Coord<f64>,
    places: &[Place],
    settings: &NearbyAlertSettings,
    visited: &BTreeSet<String>,
) -> Result<Vec<NotificationEligibility>, NotifyError> {
    if !settings.enabled {
        debug!("nearby alerts disabled; skipping {} places", places.len());
        return Ok(Vec::new());
    }
    settings.validate()?;
    validate_reference(current)?;
    validate_all(places)?;

    let decisions: Vec<NotificationEligibility> = places
        .iter()
        .map(|place| {
            let distance = distance_km(current, place.location);
            let outcome = if visited.contains(&place.id) {
                Outcome::Suppressed(SuppressReason::AlreadyVisited)
            } else if beyond(distance, settings.max_distance_km) {
                Outcome::Suppressed(SuppressReason::TooFar)
            } else if place.rating < settings.min_rating {
                Outcome::Suppressed(SuppressReason::RatingBelowThreshold)
            } else {
                Outcome::Notify
            };
            NotificationEligibility::new(place, distance, outcome)
        })
        .collect();

    debug!(
        "checked {} nearby places, {} eligible",
        decisions.len(),
        decisions.iter().filter(|decision| decision.should_notify()).count()
    );
    Ok(decisions)
}

/// A NaN distance counts as out of range.
const fn beyond(distance: f64, threshold: f64) -> bool {
    distance.is_nan() || distance > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SettingsError;
    use placewise_core::test_support::place_at;
    use placewise_core::{PlaceError, lat_lon};
    use rstest::{fixture, rstest};

    const NOW: u64 = 1_700_000_000_000;
    const MINUTE: u64 = 60_000;

    fn reasons(decisions: &[NotificationEligibility]) -> Vec<Option<SuppressReason>> {
        decisions.iter().map(NotificationEligibility::reason).collect()
    }

    #[fixture]
    fn favourites() -> Vec<Place> {
        // Roughly 0.11 km and 5.5 km east of the origin.
        vec![
            place_at("near", 0.0, 0.001).with_rating(4.5).with_reviews(80),
            place_at("far", 0.0, 0.05).with_rating(4.9),
        ]
    }

    #[rstest]
    fn near_favourites_qualify(favourites: Vec<Place>) {
        let decisions = evaluate(
            lat_lon(0.0, 0.0),
            &favourites,
            &NotificationSettings::default(),
            &NotificationLedger::new(),
            NOW,
        )
        .expect("valid input");
        assert_eq!(
            reasons(&decisions),
            [None, Some(SuppressReason::TooFar)]
        );
        let near = decisions.first().expect("decision for near place");
        assert_eq!(near.name, "near");
        assert_eq!(near.rating, 4.5);
        assert_eq!(near.reviews, 80);
        assert!(near.distance_km < 0.2);
    }

    #[rstest]
    fn disabled_settings_short_circuit(favourites: Vec<Place>) {
        let settings = NotificationSettings {
            enabled: false,
            ..NotificationSettings::default()
        };
        let decisions = evaluate(
            lat_lon(0.0, 0.0),
            &favourites,
            &settings,
            &NotificationLedger::new(),
            NOW,
        )
        .expect("valid input");
        assert!(decisions.is_empty());
    }

    #[rstest]
    #[case(NOW - 29 * MINUTE, Some(SuppressReason::NotifiedTooRecently))]
    #[case(NOW - 30 * MINUTE, None)]
    #[case(NOW + MINUTE, Some(SuppressReason::NotifiedTooRecently))]
    fn recent_alerts_are_rate_limited(
        favourites: Vec<Place>,
        #[case] last: u64,
        #[case] expected: Option<SuppressReason>,
    ) {
        let ledger = NotificationLedger::new().with_entry("near", last);
        let decisions = evaluate(
            lat_lon(0.0, 0.0),
            &favourites,
            &NotificationSettings::default(),
            &ledger,
            NOW,
        )
        .expect("valid input");
        assert_eq!(decisions.first().and_then(NotificationEligibility::reason), expected);
    }

    #[rstest]
    fn invalid_location_is_rejected(favourites: Vec<Place>) {
        let result = evaluate(
            lat_lon(f64::NAN, 0.0),
            &favourites,
            &NotificationSettings::default(),
            &NotificationLedger::new(),
            NOW,
        );
        assert!(matches!(
            result,
            Err(NotifyError::InvalidPlace(PlaceError::InvalidReference(_)))
        ));
    }

    #[rstest]
    fn nearby_checks_run_in_order() {
        let places = vec![
            place_at("visited", 0.0, 0.001).with_rating(5.0),
            place_at("far", 0.0, 0.05).with_rating(2.0),
            place_at("poor", 0.0, 0.001).with_rating(3.9),
            place_at("good", 0.0, 0.002).with_rating(4.0),
        ];
        let visited = BTreeSet::from(["visited".to_owned()]);
        let decisions = check_nearby(
            lat_lon(0.0, 0.0),
            &places,
            &NearbyAlertSettings::default(),
            &visited,
        )
        .expect("valid input");
        assert_eq!(
            reasons(&decisions),
            [
                Some(SuppressReason::AlreadyVisited),
                Some(SuppressReason::TooFar),
                Some(SuppressReason::RatingBelowThreshold),
                None,
            ]
        );
    }

    #[rstest]
    fn nearby_alerts_can_be_disabled() {
        let settings = NearbyAlertSettings {
            enabled: false,
            ..NearbyAlertSettings::default()
        };
        let places = [place_at("good", 0.0, 0.001).with_rating(5.0)];
        let decisions = check_nearby(lat_lon(0.0, 0.0), &places, &settings, &BTreeSet::new())
            .expect("valid input");
        assert!(decisions.is_empty());
    }

    #[rstest]
    fn antipodal_places_are_too_far() {
        let here = lat_lon(-87.843, 0.0);
        let opposite = [place_at("opposite", 87.843, 180.0).with_rating(5.0)];

        let favourites = evaluate(
            here,
            &opposite,
            &NotificationSettings::default(),
            &NotificationLedger::new(),
            NOW,
        )
        .expect("valid input");
        let nearby = check_nearby(
            here,
            &opposite,
            &NearbyAlertSettings::default(),
            &BTreeSet::new(),
        )
        .expect("valid input");

        for decision in favourites.iter().chain(&nearby) {
            assert!(decision.distance_km.is_finite());
            assert_eq!(decision.reason(), Some(SuppressReason::TooFar));
        }
        assert_eq!(favourites.len() + nearby.len(), 2);
    }

    #[rstest]
    fn nan_distance_never_counts_as_close() {
        assert!(beyond(f64::NAN, 1.0));
        assert!(beyond(1.5, 1.0));
        assert!(!beyond(1.0, 1.0));
    }

    #[rstest]
    fn unusable_distance_threshold_is_rejected(favourites: Vec<Place>) {
        let settings = NotificationSettings {
            distance_km: f64::NAN,
            ..NotificationSettings::default()
        };
        let result = evaluate(
            lat_lon(0.0, 0.0),
            &favourites,
            &settings,
            &NotificationLedger::new(),
            NOW,
        );
        assert!(matches!(
            result,
            Err(NotifyError::InvalidSettings(SettingsError::InvalidThreshold {
                field: "distance",
                ..
            }))
        ));
    }

    #[rstest]
    fn unusable_rating_threshold_is_rejected() {
        let settings = NearbyAlertSettings {
            min_rating: f64::NAN,
            ..NearbyAlertSettings::default()
        };
        let places = [place_at("good", 0.0, 0.001).with_rating(1.0)];
        let result = check_nearby(lat_lon(0.0, 0.0), &places, &settings, &BTreeSet::new());
        assert!(matches!(
            result,
            Err(NotifyError::InvalidSettings(SettingsError::InvalidThreshold {
                field: "minRating",
                ..
            }))
        ));
    }
}
