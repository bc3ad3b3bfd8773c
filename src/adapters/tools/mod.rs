//! Tool executor adapters.

mod facility_executor;

pub use facility_executor::FacilityToolExecutor;
