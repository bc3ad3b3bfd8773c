//! Axum router configuration for tools endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{invoke_tool, list_tools, ToolsAppState};

/// Create the tools API router.
///
/// # Routes
///
/// - `GET /` - List available tools
/// - `POST /invoke` - Invoke a tool
///
/// Suitable for mounting at `/api/tools`.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use crate::adapters::http::tools::{tools_router, ToolsAppState};
///
/// let app_state = ToolsAppState::new(executor);
/// let app = Router::new()
///     .nest("/api/tools", tools_router())
///     .with_state(app_state);
/// ```
pub fn tools_router() -> Router<ToolsAppState> {
    Router::new()
        .route("/", get(list_tools))
        .route("/invoke", post(invoke_tool))
}
