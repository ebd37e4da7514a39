//! Per-user notification settings.

use crate::SettingsError;

/// Settings for favourite-place proximity alerts.
///
/// On the wire the threshold and interval use the names the persistence
/// collaborator stores: `distance` and `minTimeBetweenNotifications`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct NotificationSettings {
    /// Master switch; when off no favourite is ever eligible.
    pub enabled: bool,
    /// Alert when a favourite lies within this many kilometres.
    #[cfg_attr(feature = "serde", serde(rename = "distance", alias = "distanceKm"))]
    pub distance_km: f64,
    /// Minimum minutes between two alerts for the same place.
    #[cfg_attr(feature = "serde", serde(rename = "minTimeBetweenNotifications"))]
    pub min_minutes_between: u32,
    /// Play a sound on delivery.
    pub sound: bool,
    /// Vibrate on delivery.
    pub vibration: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            distance_km: 1.0,
            min_minutes_between: 30,
            sound: true,
            vibration: true,
        }
    }
}

impl NotificationSettings {
    /// Minimum interval between alerts for one place, in milliseconds.
    #[must_use]
    pub fn min_interval_ms(&self) -> u64 {
        u64::from(self.min_minutes_between).saturating_mul(MILLIS_PER_MINUTE)
    }

    /// Check the distance threshold.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidThreshold`] when `distance_km` is NaN,
    /// infinite or negative.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_threshold("distance", self.distance_km)
    }

    /// Delivery options for the dispatcher.
    #[must_use]
    pub const fn delivery(&self) -> DeliveryOptions {
        DeliveryOptions {
            sound: self.sound,
            vibration: self.vibration,
        }
    }
}

/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: u64 = 60_000;

/// Thresholds for the generic "interesting place nearby" alert.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct NearbyAlertSettings {
    /// Whether nearby alerts are wanted at all.
    #[cfg_attr(feature = "serde", serde(alias = "nearbyPlaces"))]
    pub enabled: bool,
    /// Places rated below this are not worth an alert.
    pub min_rating: f64,
    /// Places further than this many kilometres are not nearby.
    #[cfg_attr(feature = "serde", serde(alias = "maxDistance"))]
    pub max_distance_km: f64,
}

impl Default for NearbyAlertSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min_rating: 4.0,
            max_distance_km: 1.0,
        }
    }
}

impl NearbyAlertSettings {
    /// Check the rating and distance thresholds.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidThreshold`] naming the first threshold
    /// that is NaN, infinite or negative.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_threshold("minRating", self.min_rating)?;
        check_threshold("maxDistance", self.max_distance_km)
    }
}

fn check_threshold(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidThreshold { field, value })
    }
}

/// Vibration pattern in milliseconds: wait, buzz, pause, buzz.
pub const VIBRATION_PATTERN_MS: [u32; 4] = [0, 250, 250, 250];

/// How the dispatcher should present an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryOptions {
    /// Play a sound.
    pub sound: bool,
    /// Vibrate.
    pub vibration: bool,
}

impl DeliveryOptions {
    /// Vibration pattern to use, or `None` when vibration is off.
    #[must_use]
    pub const fn vibration_pattern(&self) -> Option<&'static [u32]> {
        if self.vibration {
            Some(VIBRATION_PATTERN_MS.as_slice())
        } else {
            None
        }
    }
}
