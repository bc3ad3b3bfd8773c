//! Tool Registry - Central registry for the tools exposed over the façade.
//!
//! # Example
//!
//! ```
//! use soberbookings::domain::tools::{ToolDefinition, ToolRegistry};
//!
//! let registry = ToolRegistry::facility_tools();
//! assert!(registry.has_tool("search_facilities"));
//! assert_eq!(registry.tool_count(), 3);
//! ```

use std::collections::HashMap;

use serde_json::json;

use super::ToolDefinition;

/// Tool name for facility search.
pub const SEARCH_FACILITIES: &str = "search_facilities";
/// Tool name for insurance verification.
pub const VERIFY_INSURANCE: &str = "verify_insurance";
/// Tool name for intake assessment.
pub const INTAKE_ASSESSMENT: &str = "intake_assessment";

/// Registry of tool definitions, listed in registration order.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    /// All registered tools by name
    tools: HashMap<String, ToolDefinition>,

    /// Names in registration order
    order: Vec<String>,
}

impl ToolRegistry {
    /// Creates a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the three facility tools.
    pub fn facility_tools() -> Self {
        let mut registry = Self::new();
        registry.register(search_facilities_definition());
        registry.register(verify_insurance_definition());
        registry.register(intake_assessment_definition());
        registry
    }

    /// Registers a tool, replacing any existing definition with the same name.
    pub fn register(&mut self, definition: ToolDefinition) {
        let name = definition.name().to_string();
        if self.tools.insert(name.clone(), definition).is_none() {
            self.order.push(name);
        }
    }

    /// Gets a tool definition by name.
    pub fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// Checks if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Returns every definition in registration order.
    pub fn list(&self) -> Vec<&ToolDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .collect()
    }

    /// Returns all registered tool names in registration order.
    pub fn all_tool_names(&self) -> Vec<&str> {
        self.order.iter().map(|s| s.as_str()).collect()
    }

    /// Returns the number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}

fn search_facilities_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_FACILITIES,
        "Search for treatment facilities based on user query and optional filters",
        json!({
            "type": "object",
            "required": ["query"],
            "properties": {
                "query": { "type": "string", "description": "The search query for finding facilities" },
                "location": { "type": "string", "description": "Optional location to filter results" },
                "insurance": { "type": "string", "description": "Optional insurance provider to filter results" }
            }
        }),
        json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "id": { "type": "string" },
                    "name": { "type": "string" },
                    "location": { "type": "string" },
                    "insurance": { "type": "array", "items": { "type": "string" } },
                    "treatments": { "type": "array", "items": { "type": "string" } },
                    "rating": { "type": "number" }
                }
            }
        }),
    )
}

fn verify_insurance_definition() -> ToolDefinition {
    ToolDefinition::new(
        VERIFY_INSURANCE,
        "Verify insurance coverage for addiction treatment services",
        json!({
            "type": "object",
            "required": ["provider", "policy_number"],
            "properties": {
                "provider": { "type": "string", "description": "Insurance provider name" },
                "policy_number": { "type": "string", "description": "Insurance policy number" }
            }
        }),
        json!({
            "type": "object",
            "properties": {
                "verified": { "type": "boolean" },
                "provider": { "type": "string" },
                "policy_number": { "type": "string" },
                "coverage": { "type": "object" },
                "deductible": { "type": "string" },
                "out_of_pocket_max": { "type": "string" }
            }
        }),
    )
}

fn intake_assessment_definition() -> ToolDefinition {
    ToolDefinition::new(
        INTAKE_ASSESSMENT,
        "Perform an initial intake assessment to determine appropriate level of care",
        json!({
            "type": "object",
            "required": ["name", "age", "substance", "usage_frequency"],
            "properties": {
                "name": { "type": "string", "description": "Patient name" },
                "age": { "type": "integer", "minimum": 0, "description": "Patient age" },
                "substance": { "type": "string", "description": "Primary substance of concern" },
                "usage_frequency": { "type": "string", "description": "Frequency of substance use" },
                "previous_treatment": { "type": "boolean", "default": false, "description": "Whether patient has had previous treatment" }
            }
        }),
        json!({
            "type": "object",
            "properties": {
                "risk_level": { "type": "string" },
                "recommended_care": { "type": "array", "items": { "type": "string" } },
                "asam_criteria": { "type": "object" },
                "next_steps": { "type": "array", "items": { "type": "string" } }
            }
        }),
    )
}
