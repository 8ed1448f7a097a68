// libs/availability-cell/src/models.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::Slot;

/// Bookable slots for one calendar day, ready for the booking UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailabilityResponse {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}

impl DayAvailabilityResponse {
    /// Number of slots still selectable.
    pub fn open_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.disabled).count()
    }

    pub fn is_fully_booked(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|slot| slot.disabled)
    }
}
