//! Facility tools - the named operations behind the tool façade.
//!
//! ## Key Types
//!
//! - [`ToolCall`] - Request to invoke a tool
//! - [`ToolResponse`] - Result returned from a tool
//! - [`ToolDefinition`] - Schema and metadata for a tool
//! - [`ToolRegistry`] - Name-to-definition lookup

mod tool_call;
mod tool_definition;
mod tool_registry;

pub use tool_call::{ToolCall, ToolResponse};
pub use tool_definition::ToolDefinition;
pub use tool_registry::{ToolRegistry, INTAKE_ASSESSMENT, SEARCH_FACILITIES, VERIFY_INSURANCE};
