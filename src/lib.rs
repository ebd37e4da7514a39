//! Facade crate for the Placewise recommendation engine.
//!
//! This crate re-exports the core domain types and the scorer, and exposes
//! the proximity notification policy behind the `notify` feature.

#![forbid(unsafe_code)]

pub use placewise_core::{
    CoordinateError, Place, PlaceError, PreferenceProfile, PreferredLocation, PriceLevel,
    ScoredPlace, Scorer, centre_point, distance_km, filter_within, lat_lon, sort_by_distance,
};

pub use placewise_scorer::{
    Ranker, RankerConfig, ScoreWeights, ScoreWeightsError, WeightedScorer, build_profile,
    daily_recommendations, rank,
};

#[cfg(feature = "notify")]
pub use placewise_notify::{
    DailyDigest, NearbyAlertSettings, NotificationEligibility, NotificationLedger,
    NotificationSettings, NotifyError, SettingsError, SuppressReason, check_nearby, evaluate,
};

#[cfg(feature = "test-support")]
pub use placewise_core::test_support;
