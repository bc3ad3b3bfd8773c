//! HTTP handlers for webhook endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::NotionWebhookDispatcher;
use crate::domain::webhook::{RequestHeaders, WebhookOutcome};

/// Application state for webhook endpoints.
#[derive(Clone)]
pub struct WebhookAppState {
    pub dispatcher: Arc<NotionWebhookDispatcher>,
}

impl WebhookAppState {
    pub fn new(dispatcher: Arc<NotionWebhookDispatcher>) -> Self {
        Self { dispatcher }
    }
}

/// POST /api/webhooks/notion - Handle Notion facility events
///
/// The body is taken as raw bytes so the signature is checked against exactly
/// what the sender signed. Every rejection is a bare 401; the reason is only
/// in the logs.
pub async fn handle_notion_webhook(
    State(state): State<WebhookAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let headers = RequestHeaders::from(&headers);

    match state.dispatcher.handle_raw(&body, &headers) {
        WebhookOutcome::Accepted(response) => (StatusCode::OK, Json(response)).into_response(),
        WebhookOutcome::Rejected(_) => StatusCode::UNAUTHORIZED.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<WebhookAppState>();
    }
}
