// libs/shared/models/src/booked.rs

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Composite key the appointment store uses to group booked times by
/// calendar day: "{day}_{month}_{year}", e.g. "7_3_2026".
pub fn booking_day_key(date: NaiveDate) -> String {
    format!("{}_{}_{}", date.day(), date.month(), date.year())
}

/// Booked time labels grouped by booking date.
///
/// Mirrors the keying of the external appointment store so a fetched
/// payload deserializes straight into it. Labels are opaque strings
/// here; only equality matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookedTimes {
    entries: HashMap<String, HashSet<String>>,
}

impl BookedTimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a booked time label for a date.
    pub fn mark(&mut self, date: NaiveDate, label: impl Into<String>) {
        self.entries
            .entry(booking_day_key(date))
            .or_default()
            .insert(label.into());
    }

    /// Release a previously booked time label. Returns whether the
    /// label was present.
    pub fn unmark(&mut self, date: NaiveDate, label: &str) -> bool {
        match self.entries.get_mut(&booking_day_key(date)) {
            Some(labels) => labels.remove(label),
            None => false,
        }
    }

    pub fn is_booked(&self, date: NaiveDate, label: &str) -> bool {
        self.entries
            .get(&booking_day_key(date))
            .map(|labels| labels.contains(label))
            .unwrap_or(false)
    }

    /// All labels booked for a date, if any.
    pub fn for_date(&self, date: NaiveDate) -> Option<&HashSet<String>> {
        self.entries.get(&booking_day_key(date))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|labels| labels.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_key_is_day_month_year() {
        assert_eq!(booking_day_key(date(2026, 3, 7)), "7_3_2026");
        assert_eq!(booking_day_key(date(2026, 12, 31)), "31_12_2026");
    }

    #[test]
    fn test_mark_and_lookup() {
        let mut booked = BookedTimes::new();
        booked.mark(date(2026, 3, 7), "11:00 AM");
        booked.mark(date(2026, 3, 7), "11:30 AM");

        assert!(booked.is_booked(date(2026, 3, 7), "11:00 AM"));
        assert!(!booked.is_booked(date(2026, 3, 7), "2:00 PM"));
        assert_eq!(booked.for_date(date(2026, 3, 7)).unwrap().len(), 2);
    }

    #[test]
    fn test_dates_are_isolated() {
        let mut booked = BookedTimes::new();
        booked.mark(date(2026, 3, 7), "11:00 AM");

        assert!(!booked.is_booked(date(2026, 3, 8), "11:00 AM"));
        assert!(booked.for_date(date(2026, 3, 8)).is_none());
    }

    #[test]
    fn test_unmark_releases_label() {
        let mut booked = BookedTimes::new();
        assert!(booked.is_empty());

        booked.mark(date(2026, 3, 7), "11:00 AM");
        assert!(!booked.is_empty());

        assert!(booked.unmark(date(2026, 3, 7), "11:00 AM"));
        assert!(!booked.is_booked(date(2026, 3, 7), "11:00 AM"));
        assert!(!booked.unmark(date(2026, 3, 7), "11:00 AM"));
        assert!(booked.is_empty());
    }

    #[test]
    fn test_registry_round_trips_through_json() {
        let mut booked = BookedTimes::new();
        booked.mark(date(2026, 3, 7), "11:00 AM");

        let json = serde_json::to_string(&booked).unwrap();
        let restored: BookedTimes = serde_json::from_str(&json).unwrap();
        assert!(restored.is_booked(date(2026, 3, 7), "11:00 AM"));
    }
}
