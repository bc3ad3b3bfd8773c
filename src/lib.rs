//! SoberBookings - Treatment facility tools and Notion webhook intake.
//!
//! The crate serves three facility tools over a small HTTP façade and
//! accepts signed facility events from Notion. Webhook deliveries are
//! verified with HMAC-SHA256 before anything in them is trusted.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
