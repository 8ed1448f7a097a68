// libs/availability-cell/src/services/slots.rs

use std::collections::HashSet;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

use shared_models::{time_label, BookedTimes, OperatingWindow, Slot, SLOT_INTERVAL_MINUTES};

use crate::models::DayAvailabilityResponse;

pub struct SlotAvailabilityService {
    window: OperatingWindow,
}

impl Default for SlotAvailabilityService {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotAvailabilityService {
    pub fn new() -> Self {
        Self {
            window: OperatingWindow::default(),
        }
    }

    pub fn with_window(window: OperatingWindow) -> Self {
        Self { window }
    }

    /// Calculate the bookable slots for a date.
    ///
    /// Emits one slot per half hour within the operating window, in
    /// order, with `disabled` set when the slot's label appears in
    /// `booked`. When `date` is the same calendar day as `now`, slots
    /// at or before "now" (rounded forward to the next slot boundary)
    /// are omitted entirely. An empty result is a normal answer, e.g.
    /// asking for today after closing time.
    ///
    /// `now` is only consulted when `date` is today, so for any other
    /// date the output is a pure function of (date, booked).
    pub fn day_slots(
        &self,
        date: NaiveDate,
        booked: &HashSet<String>,
        now: NaiveDateTime,
    ) -> Vec<Slot> {
        debug!("Calculating available slots for {}", date);

        let window_end = minute_of_day(self.window.end);
        let mut cursor = minute_of_day(self.window.start);

        // Compared by calendar day, not by instant
        if date == now.date() {
            let adjusted = round_up_to_slot(now.time());

            if adjusted >= window_end {
                debug!("Requested today after closing time, no slots left");
                return Vec::new();
            }
            if adjusted > cursor {
                cursor = adjusted;
            }
        }

        let mut slots = Vec::new();
        while cursor < window_end {
            let label = time_label(time_at_minute(cursor));
            let disabled = booked.contains(&label);
            slots.push(Slot { time: label, disabled });
            cursor += SLOT_INTERVAL_MINUTES;
        }

        debug!("Found {} slots for {}", slots.len(), date);
        slots
    }

    /// [`day_slots`](Self::day_slots) against the system wall clock.
    pub fn day_slots_today(&self, date: NaiveDate, booked: &HashSet<String>) -> Vec<Slot> {
        self.day_slots(date, booked, Local::now().naive_local())
    }

    /// Calculate a render-ready day schedule, looking up booked times
    /// for the date in the registry.
    pub fn day_availability(
        &self,
        date: NaiveDate,
        booked: &BookedTimes,
        now: NaiveDateTime,
    ) -> DayAvailabilityResponse {
        let slots = match booked.for_date(date) {
            Some(labels) => self.day_slots(date, labels, now),
            None => self.day_slots(date, &HashSet::new(), now),
        };

        DayAvailabilityResponse { date, slots }
    }
}

/// Round a wall-clock time forward to the next slot boundary, as
/// minutes since midnight: minute 0 stays on the hour, (0, 30] rounds
/// up to :30, (30, 60) rounds up to the next hour. Seconds are
/// ignored. Can yield 24:00 for late-evening times, which compares
/// past any window end.
fn round_up_to_slot(time: NaiveTime) -> u32 {
    let hour = time.hour();
    let minute = time.minute();

    if minute == 0 {
        hour * 60
    } else if minute <= 30 {
        hour * 60 + 30
    } else {
        (hour + 1) * 60
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn time_at_minute(minute: u32) -> NaiveTime {
    // Slot cursors stay strictly below the window end, so this is
    // always a valid time of day.
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap()
}
