// libs/shared/models/src/slot.rs

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Slots are generated at a fixed half-hour cadence.
pub const SLOT_INTERVAL_MINUTES: u32 = 30;

/// A single bookable time interval, ready to render as a selectable
/// list entry. `time` doubles as the matching key against recorded
/// bookings, so it must come from [`time_label`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub time: String,
    pub disabled: bool,
}

/// Daily bounds within which slots are generated, local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Default for OperatingWindow {
    /// The clinic's standard booking hours: 10:00 to 21:00.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        }
    }
}

impl OperatingWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, ScheduleError> {
        if start >= end {
            return Err(ScheduleError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }
}

/// Format a time as its booking label: 12-hour clock, no hour padding,
/// "AM"/"PM" suffix ("10:00 AM", "12:30 PM", "8:30 PM").
///
/// Every place that records or matches a booked time must go through
/// this function; label equality is the disable-matching key.
pub fn time_label(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
