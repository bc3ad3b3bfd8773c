//! Data transfer objects for tools HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::tools::ToolDefinition;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to invoke a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeToolRequest {
    /// Name of the tool to invoke
    pub tool_name: String,
    /// Tool parameters as JSON
    #[serde(default)]
    pub parameters: serde_json::Value,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Response with available tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResponse {
    /// Number of tools
    pub count: usize,
    pub tools: Vec<ToolDefinition>,
}

/// Response from invoking a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeToolResponse {
    /// Invocation ID for tracking
    pub invocation_id: String,
    /// Tool that was invoked
    pub tool_name: String,
    /// Whether invocation succeeded
    pub success: bool,
    /// Result data (if successful)
    pub result: Option<serde_json::Value>,
    /// Error message (if failed)
    pub error: Option<String>,
    /// Execution duration in milliseconds
    pub duration_ms: u64,
}

impl InvokeToolResponse {
    /// A failed invocation that never produced a result.
    pub fn failed(tool_name: impl Into<String>, error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            invocation_id: String::new(),
            tool_name: tool_name.into(),
            success: false,
            result: None,
            error: Some(error.into()),
            duration_ms,
        }
    }
}
