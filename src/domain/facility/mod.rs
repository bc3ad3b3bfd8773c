//! Facility domain module.
//!
//! Value types behind the facility tools. The data is fixed until real
//! search, payer, and clinical backends are connected.

mod assessment;
mod catalog;
mod insurance;

pub use assessment::{AsamCriteria, Assessment, IntakeAnswers};
pub use catalog::{sample_facilities, Facility, FacilitySearch};
pub use insurance::{CoverageBreakdown, CoverageReport, InsuranceQuery};
