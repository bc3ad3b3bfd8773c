//! Tool definition - schema and metadata for a tool.

use serde::{Deserialize, Serialize};

/// Definition of a tool exposed through the tool façade.
///
/// Carries the name clients call it by, a description, and JSON Schemas for
/// its parameters and return value.
///
/// # Examples
///
/// ```
/// use soberbookings::domain::tools::ToolDefinition;
///
/// let definition = ToolDefinition::new(
///     "verify_insurance",
///     "Verify insurance coverage for addiction treatment services",
///     serde_json::json!({
///         "type": "object",
///         "required": ["provider", "policy_number"],
///         "properties": {
///             "provider": { "type": "string" },
///             "policy_number": { "type": "string" }
///         }
///     }),
///     serde_json::json!({ "type": "object" }),
/// );
/// assert_eq!(definition.name(), "verify_insurance");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "search_facilities")
    name: String,

    /// Human-readable description
    description: String,

    /// JSON Schema for the parameters
    parameters_schema: serde_json::Value,

    /// JSON Schema for the return value
    returns_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters_schema: serde_json::Value,
        returns_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters_schema,
            returns_schema,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters_schema(&self) -> &serde_json::Value {
        &self.parameters_schema
    }

    pub fn returns_schema(&self) -> &serde_json::Value {
        &self.returns_schema
    }

    /// Names of the parameters the schema marks as required.
    pub fn required_parameters(&self) -> Vec<&str> {
        self.parameters_schema
            .get("required")
            .and_then(|r| r.as_array())
            .map(|r| r.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}
