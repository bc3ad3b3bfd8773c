//! Application handlers.
//!
//! Handlers that orchestrate domain operations across ports.

pub mod webhook;

pub use webhook::NotionWebhookDispatcher;
