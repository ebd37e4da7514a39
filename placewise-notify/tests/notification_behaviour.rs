//! Behavioural coverage for the proximity alert policies.

use std::cell::RefCell;
use std::collections::BTreeSet;

use geo::Coord;
use placewise_core::{EARTH_RADIUS_KM, Place, lat_lon};
use placewise_notify::{
    NearbyAlertSettings, NotificationEligibility, NotificationLedger, NotificationSettings,
    SuppressReason, check_nearby, evaluate,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const START_MS: u64 = 1_700_000_000_000;
const TEN_MINUTES_MS: u64 = 600_000;

/// Shared state for the alert scenarios.
pub struct NotificationContext {
    user: Coord<f64>,
    places: RefCell<Vec<Place>>,
    visited: RefCell<BTreeSet<String>>,
    settings: RefCell<NotificationSettings>,
    ledger: RefCell<NotificationLedger>,
    decisions: RefCell<Vec<NotificationEligibility>>,
}

#[fixture]
/// Build a fresh context with the user at the origin.
pub fn context() -> NotificationContext {
    NotificationContext {
        user: lat_lon(0.0, 0.0),
        places: RefCell::new(Vec::new()),
        visited: RefCell::new(BTreeSet::new()),
        settings: RefCell::new(NotificationSettings::default()),
        ledger: RefCell::new(NotificationLedger::new()),
        decisions: RefCell::new(Vec::new()),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "converts an arc length into degrees of longitude"
)]
fn east_of_origin(id: &str, km: f64) -> Place {
    let longitude = (km / EARTH_RADIUS_KM).to_degrees();
    Place::new(id, id, lat_lon(0.0, longitude))
}

#[expect(clippy::expect_used, reason = "scenario inputs are valid")]
fn evaluate_at(context: &NotificationContext, now_ms: u64) {
    let decisions = evaluate(
        context.user,
        &context.places.borrow(),
        &context.settings.borrow(),
        &context.ledger.borrow(),
        now_ms,
    )
    .expect("valid input");
    *context.decisions.borrow_mut() = decisions;
}

fn single_reason(context: &NotificationContext) -> Option<SuppressReason> {
    let decisions = context.decisions.borrow();
    assert_eq!(decisions.len(), 1);
    decisions.first().and_then(NotificationEligibility::reason)
}

#[given("a favourite cafe 0.5 km from the user")]
fn favourite_cafe(context: &NotificationContext) {
    let cafe = east_of_origin("cafe", 0.5)
        .with_rating(4.2)
        .with_reviews(120)
        .favorite();
    *context.places.borrow_mut() = vec![cafe];
}

#[given("default alert settings")]
fn default_settings(context: &NotificationContext) {
    *context.settings.borrow_mut() = NotificationSettings::default();
}

#[given("alerts switched off")]
fn alerts_off(context: &NotificationContext) {
    context.settings.borrow_mut().enabled = false;
}

#[given("no previous alerts")]
fn no_previous_alerts(context: &NotificationContext) {
    *context.ledger.borrow_mut() = NotificationLedger::new();
}

#[when("the favourites are evaluated")]
fn favourites_evaluated(context: &NotificationContext) {
    evaluate_at(context, START_MS);
}

#[when("the alerts are dispatched and the favourites evaluated again 10 minutes later")]
fn dispatched_then_reevaluated(context: &NotificationContext) {
    let next = context
        .ledger
        .borrow()
        .with_dispatched(&context.decisions.borrow(), START_MS);
    *context.ledger.borrow_mut() = next;
    evaluate_at(context, START_MS + TEN_MINUTES_MS);
}

#[then("the cafe should be notified")]
fn cafe_notified(context: &NotificationContext) {
    assert_eq!(single_reason(context), None);
    let decisions = context.decisions.borrow();
    let cafe = decisions.first().map(|decision| (decision.reviews, decision.rating));
    assert_eq!(cafe, Some((120, 4.2)));
}

#[then("the cafe is suppressed as notified too recently")]
fn cafe_suppressed(context: &NotificationContext) {
    assert_eq!(
        single_reason(context),
        Some(SuppressReason::NotifiedTooRecently)
    );
}

#[then("no decisions are returned")]
fn no_decisions(context: &NotificationContext) {
    assert!(context.decisions.borrow().is_empty());
}

#[given("a visited well-rated place 0.5 km from the user")]
fn visited_place(context: &NotificationContext) {
    *context.places.borrow_mut() = vec![east_of_origin("bistro", 0.5).with_rating(4.8)];
    context.visited.borrow_mut().insert("bistro".to_owned());
}

#[when("nearby places are checked")]
#[expect(clippy::expect_used, reason = "scenario inputs are valid")]
fn nearby_checked(context: &NotificationContext) {
    let decisions = check_nearby(
        context.user,
        &context.places.borrow(),
        &NearbyAlertSettings::default(),
        &context.visited.borrow(),
    )
    .expect("valid input");
    *context.decisions.borrow_mut() = decisions;
}

#[then("the place is suppressed as already visited")]
fn place_already_visited(context: &NotificationContext) {
    assert_eq!(single_reason(context), Some(SuppressReason::AlreadyVisited));
}

#[scenario(path = "tests/features/notifications.feature", index = 0)]
fn nearby_favourite_alerts(context: NotificationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/notifications.feature", index = 1)]
fn repeat_alerts_are_gated(context: NotificationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/notifications.feature", index = 2)]
fn disabled_alerts_are_silent(context: NotificationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/notifications.feature", index = 3)]
fn visited_places_are_not_announced(context: NotificationContext) {
    let _ = context;
}
