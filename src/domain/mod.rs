//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `facility` - Facility listings, insurance coverage, intake assessment
//! - `tools` - Tool definitions, calls, responses, and the registry
//! - `webhook` - Notion webhook signatures, events, and outcomes

pub mod facility;
pub mod tools;
pub mod webhook;
