//! Proximity alert policies for Placewise.
//!
//! [`evaluate`] decides which tracked favourites the user should hear about
//! given their position, alert settings and the [`NotificationLedger`] of
//! previous alerts. [`check_nearby`] is the simpler, settings-wide check for
//! well-rated places close by. [`DailyDigest`] packages the day's
//! recommendations for the scheduler.
//!
//! Nothing here performs I/O or keeps state between calls. Delivery,
//! scheduling and persisting the ledger belong to the caller.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod digest;
mod eligibility;
mod error;
mod ledger;
mod policy;
mod settings;

pub use digest::{DailyDigest, DigestSchedule};
pub use eligibility::{NotificationEligibility, Outcome, SuppressReason};
pub use error::{NotifyError, SettingsError};
pub use ledger::NotificationLedger;
pub use policy::{check_nearby, evaluate};
pub use settings::{
    DeliveryOptions, MILLIS_PER_MINUTE, NearbyAlertSettings, NotificationSettings,
    VIBRATION_PATTERN_MS,
};
