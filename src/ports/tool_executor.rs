//! Tool Executor Port - Interface for executing facility tools.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//! use soberbookings::ports::ToolExecutor;
//!
//! struct FacilityToolExecutor { /* ... */ }
//!
//! #[async_trait]
//! impl ToolExecutor for FacilityToolExecutor {
//!     async fn execute(&self, call: ToolCall) -> Result<ToolResponse, ToolExecutionError> {
//!         // 1. Decode parameters
//!         // 2. Run the tool
//!         // 3. Return its result as JSON
//!     }
//!     // ... other methods
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::tools::{ToolCall, ToolDefinition, ToolResponse};

/// Port for executing tools by name.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return the result.
    ///
    /// # Returns
    ///
    /// * `Ok(ToolResponse)` - Tool executed (check `is_success()` for outcome)
    /// * `Err(ToolExecutionError)` - Unknown tool, bad parameters, or internal failure
    async fn execute(&self, call: ToolCall) -> Result<ToolResponse, ToolExecutionError>;

    /// Definitions of every tool this executor serves.
    fn available_tools(&self) -> Vec<ToolDefinition>;

    /// Check if a tool exists.
    fn has_tool(&self, name: &str) -> bool;
}

/// Errors from tool execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolExecutionError {
    /// No tool registered under the name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Parameters did not match the tool's schema.
    #[error("Invalid parameters for {tool}: {reason}")]
    InvalidParameters { tool: String, reason: String },

    /// Result could not be produced or encoded.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolExecutionError {
    pub fn invalid_parameters(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}
