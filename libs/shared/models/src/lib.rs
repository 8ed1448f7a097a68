pub mod booked;
pub mod error;
pub mod slot;

pub use booked::{booking_day_key, BookedTimes};
pub use error::ScheduleError;
pub use slot::{time_label, OperatingWindow, Slot, SLOT_INTERVAL_MINUTES};
