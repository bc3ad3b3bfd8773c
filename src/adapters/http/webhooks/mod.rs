//! Webhooks HTTP adapter - signed deliveries from external integrations.
//!
//! Provides endpoints for:
//! - Notion facility events (`POST /notion`)

pub mod handlers;
pub mod routes;

pub use handlers::WebhookAppState;
pub use routes::webhooks_router;
