//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure;
//! [`api_router`] mounts them all under one router.

pub mod health;
pub mod tools;
pub mod webhooks;

use axum::Router;

// Re-export key types for convenience
pub use health::health_router;
pub use tools::{tools_router, ToolsAppState};
pub use webhooks::{webhooks_router, WebhookAppState};

/// Builds the application router.
///
/// # Routes
/// - `GET /health`
/// - `POST /api/webhooks/notion`
/// - `GET /api/tools`, `POST /api/tools/invoke`
pub fn api_router(webhooks: WebhookAppState, tools: ToolsAppState) -> Router {
    Router::new()
        .merge(health_router())
        .nest("/api/webhooks", webhooks_router().with_state(webhooks))
        .nest("/api/tools", tools_router().with_state(tools))
}
