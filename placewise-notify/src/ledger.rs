//! Last-notified timestamps per place.
//!
//! The ledger is owned by the persistence collaborator. Policies only read
//! it; after dispatching, callers derive the next ledger with
//! [`NotificationLedger::with_dispatched`] and store that.

use std::collections::BTreeMap;

use crate::NotificationEligibility;

/// Place identifier to the epoch milliseconds of its last alert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NotificationLedger {
    entries: BTreeMap<String, u64>,
}

impl NotificationLedger {
    /// Construct an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// When `place_id` was last alerted on, if ever.
    #[must_use]
    pub fn last_notified(&self, place_id: &str) -> Option<u64> {
        self.entries.get(place_id).copied()
    }

    /// Record an alert for `place_id` at `at_ms`.
    pub fn record(&mut self, place_id: impl Into<String>, at_ms: u64) {
        self.entries.insert(place_id.into(), at_ms);
    }

    /// Record an alert while returning `self` for chaining.
    #[must_use]
    pub fn with_entry(mut self, place_id: impl Into<String>, at_ms: u64) -> Self {
        self.record(place_id, at_ms);
        self
    }

    /// Copy of the ledger with `now_ms` recorded for every eligible place.
    ///
    /// # Examples
    /// ```
    /// use placewise_notify::NotificationLedger;
    ///
    /// let ledger = NotificationLedger::new().with_entry("p1", 1_000);
    /// let next = ledger.with_dispatched(&[], 5_000);
    /// assert_eq!(next, ledger);
    /// ```
    #[must_use]
    pub fn with_dispatched(&self, decisions: &[NotificationEligibility], now_ms: u64) -> Self {
        let mut next = self.clone();
        for decision in decisions.iter().filter(|decision| decision.should_notify()) {
            next.record(decision.place_id.clone(), now_ms);
        }
        next
    }

    /// Number of places with a recorded alert.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no alerts are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, u64)> for NotificationLedger {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, SuppressReason};
    use rstest::rstest;

    fn decision(id: &str, outcome: Outcome) -> NotificationEligibility {
        NotificationEligibility {
            place_id: id.to_owned(),
            name: id.to_owned(),
            distance_km: 0.1,
            rating: 4.0,
            reviews: 10,
            outcome,
        }
    }

    #[rstest]
    fn dispatch_records_only_notified_places() {
        let ledger = NotificationLedger::new().with_entry("old", 10);
        let decisions = [
            decision("sent", Outcome::Notify),
            decision("held", Outcome::Suppressed(SuppressReason::TooFar)),
        ];
        let next = ledger.with_dispatched(&decisions, 500);

        assert_eq!(next.last_notified("sent"), Some(500));
        assert_eq!(next.last_notified("held"), None);
        assert_eq!(next.last_notified("old"), Some(10));
        assert_eq!(ledger.len(), 1);
    }

    #[rstest]
    fn size_tracks_recorded_places() {
        let mut ledger = NotificationLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);

        ledger.record("p1", 1);
        ledger.record("p1", 2);
        ledger.record("p2", 3);
        assert!(!ledger.is_empty());
        assert_eq!(ledger.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn ledger_serialises_as_a_plain_map() {
        let ledger: NotificationLedger = [("p1".to_owned(), 42_u64)].into_iter().collect();
        let json = serde_json::to_string(&ledger).expect("encode ledger");
        assert_eq!(json, r#"{"p1":42}"#);
        let decoded: NotificationLedger = serde_json::from_str(&json).expect("decode ledger");
        assert_eq!(decoded, ledger);
    }
}
