//! HTTP handlers for tools endpoints.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::domain::tools::ToolCall;
use crate::ports::{ToolExecutionError, ToolExecutor};

use super::dto::{InvokeToolRequest, InvokeToolResponse, ListToolsResponse};

/// Application state for tools endpoints.
#[derive(Clone)]
pub struct ToolsAppState {
    /// Tool executor (injected)
    pub executor: Arc<dyn ToolExecutor>,
}

impl ToolsAppState {
    pub fn new(executor: Arc<dyn ToolExecutor>) -> Self {
        Self { executor }
    }
}

/// List available tools.
///
/// GET /tools
pub async fn list_tools(State(state): State<ToolsAppState>) -> impl IntoResponse {
    let tools = state.executor.available_tools();

    Json(ListToolsResponse {
        count: tools.len(),
        tools,
    })
}

/// Invoke a tool.
///
/// POST /tools/invoke
pub async fn invoke_tool(
    State(state): State<ToolsAppState>,
    Json(request): Json<InvokeToolRequest>,
) -> impl IntoResponse {
    // Check tool exists
    if !state.executor.has_tool(&request.tool_name) {
        return (
            StatusCode::NOT_FOUND,
            Json(InvokeToolResponse::failed(
                request.tool_name,
                "Tool not found",
                0,
            )),
        );
    }

    let tool_call = ToolCall::new(&request.tool_name, request.parameters);

    let start = Instant::now();
    let result = state.executor.execute(tool_call).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(response) => {
            // Generate invocation ID for tracking
            let invocation_id = uuid::Uuid::new_v4().to_string();
            tracing::info!(
                tool = %request.tool_name,
                invocation_id = %invocation_id,
                duration_ms,
                "Tool invoked"
            );

            (
                StatusCode::OK,
                Json(InvokeToolResponse {
                    invocation_id,
                    tool_name: request.tool_name,
                    success: response.is_success(),
                    result: response.data().cloned(),
                    error: response.error_message().map(String::from),
                    duration_ms,
                }),
            )
        }
        Err(e) => {
            tracing::warn!(tool = %request.tool_name, error = %e, "Tool invocation failed");
            (
                error_status(&e),
                Json(InvokeToolResponse::failed(request.tool_name, e.to_string(), duration_ms)),
            )
        }
    }
}

fn error_status(error: &ToolExecutionError) -> StatusCode {
    match error {
        ToolExecutionError::UnknownTool(_) => StatusCode::NOT_FOUND,
        ToolExecutionError::InvalidParameters { .. } => StatusCode::BAD_REQUEST,
        ToolExecutionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
