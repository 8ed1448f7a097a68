use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Operating window start {start} must be before end {end}")]
    InvalidWindow { start: NaiveTime, end: NaiveTime },
}
