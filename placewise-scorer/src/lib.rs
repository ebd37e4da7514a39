//! Preference aggregation, weighted scoring and ranking for Placewise.
//!
//! The crate turns a user's history into recommendations in three steps:
//! - [`build_profile`] folds favourite and visited places into a
//!   [`PreferenceProfile`](placewise_core::PreferenceProfile).
//! - [`WeightedScorer`] implements the [`Scorer`](placewise_core::Scorer)
//!   trait with five additive terms tuned by [`ScoreWeights`].
//! - [`Ranker`] drops visited places, scores the rest and returns them
//!   best-first, with a daily variant limited to nearby places.
//!
//! # Examples
//!
//! ```
//! use placewise_core::{Place, lat_lon};
//! use placewise_scorer::{build_profile, rank};
//!
//! let favourite = Place::new("fav", "Kahve", lat_lon(41.0, 29.0)).with_categories(["cafe"]);
//! let candidates = [
//!     Place::new("bar", "Meyhane", lat_lon(41.001, 29.0)).with_categories(["bar"]),
//!     Place::new("cafe", "Cay Bahcesi", lat_lon(41.001, 29.0)).with_categories(["cafe"]),
//! ];
//! let profile = build_profile(&[favourite], &[]).expect("valid history");
//! let ranked = rank(&candidates, &profile, lat_lon(41.0, 29.0), 10).expect("valid candidates");
//! assert_eq!(ranked[0].place.id, "cafe");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod error;
mod ranker;
mod types;
mod weighted;

pub use aggregate::{FAVORITE_BONUS, build_profile};
pub use error::ScoreWeightsError;
pub use ranker::{Ranker, daily_recommendations, rank};
pub use types::{RankerConfig, ScoreWeights};
pub use weighted::{ScoreBreakdown, WeightedScorer};
