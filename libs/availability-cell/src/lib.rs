pub mod models;
pub mod services;

// Re-export models and services for external use
pub use models::DayAvailabilityResponse;
pub use services::SlotAvailabilityService;
