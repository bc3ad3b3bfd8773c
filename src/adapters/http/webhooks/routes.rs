//! Axum router configuration for webhook endpoints.

use axum::{routing::post, Router};

use super::handlers::{handle_notion_webhook, WebhookAppState};

/// Create the webhook router.
///
/// Webhooks carry no user authentication; each delivery is verified by
/// its signature header instead.
///
/// # Routes
/// - `POST /notion` - Handle Notion facility events
///
/// Suitable for mounting at `/api/webhooks`.
pub fn webhooks_router() -> Router<WebhookAppState> {
    Router::new().route("/notion", post(handle_notion_webhook))
}
