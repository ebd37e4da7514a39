//! The daily recommendations digest.

use placewise_core::ScoredPlace;

/// Local time of day at which the scheduler delivers the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DigestSchedule {
    /// Hour of day, `0..=23`.
    pub hour: u8,
    /// Minute of hour, `0..=59`.
    pub minute: u8,
    /// Whether delivery repeats every day.
    pub repeats: bool,
}

impl Default for DigestSchedule {
    fn default() -> Self {
        Self {
            hour: 11,
            minute: 0,
            repeats: true,
        }
    }
}

/// Places to announce in the daily digest, in recommendation order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DailyDigest {
    /// Identifiers of the recommended places.
    pub place_ids: Vec<String>,
    /// Display names of the recommended places.
    pub place_names: Vec<String>,
    /// When the digest should be delivered.
    pub schedule: DigestSchedule,
}

impl DailyDigest {
    /// Build a digest from daily recommendations.
    ///
    /// Returns `None` when there is nothing to recommend.
    ///
    /// # Examples
    /// ```
    /// use placewise_core::{Place, ScoredPlace, lat_lon};
    /// use placewise_notify::{DailyDigest, DigestSchedule};
    ///
    /// let cafe = ScoredPlace {
    ///     place: Place::new("c1", "Kahve", lat_lon(0.0, 0.0)),
    ///     score: 0.8,
    /// };
    /// let digest = DailyDigest::from_recommendations(&[cafe], DigestSchedule::default())
    ///     .expect("one recommendation");
    /// assert_eq!(digest.place_names, ["Kahve"]);
    /// assert!(DailyDigest::from_recommendations(&[], DigestSchedule::default()).is_none());
    /// ```
    #[must_use]
    pub fn from_recommendations(
        recommendations: &[ScoredPlace],
        schedule: DigestSchedule,
    ) -> Option<Self> {
        if recommendations.is_empty() {
            return None;
        }
        let (place_ids, place_names) = recommendations
            .iter()
            .map(|scored| (scored.place.id.clone(), scored.place.name.clone()))
            .unzip();
        Some(Self {
            place_ids,
            place_names,
            schedule,
        })
    }

    /// Place names joined for a one-line summary.
    #[must_use]
    pub fn names_line(&self) -> String {
        self.place_names.join(", ")
    }
}
