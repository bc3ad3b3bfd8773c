//! Facility event handlers.

mod logging_handler;

pub use logging_handler::LoggingFacilityEventHandler;
