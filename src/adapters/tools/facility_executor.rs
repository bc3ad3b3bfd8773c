//! FacilityToolExecutor - Serves the facility tools from fixed data.
//!
//! Parameters are decoded into the typed request structs before anything
//! runs, so a malformed call never reaches a tool body. Results are the
//! catalog, coverage, and assessment constants from the facility domain.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::facility::{
    sample_facilities, Assessment, CoverageReport, FacilitySearch, InsuranceQuery, IntakeAnswers,
};
use crate::domain::tools::{
    ToolCall, ToolDefinition, ToolRegistry, ToolResponse, INTAKE_ASSESSMENT, SEARCH_FACILITIES,
    VERIFY_INSURANCE,
};
use crate::ports::{ToolExecutionError, ToolExecutor};

/// Executes `search_facilities`, `verify_insurance`, and `intake_assessment`.
#[derive(Debug, Clone)]
pub struct FacilityToolExecutor {
    registry: ToolRegistry,
}

impl FacilityToolExecutor {
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::facility_tools(),
        }
    }

    fn search_facilities(&self, search: FacilitySearch) -> Result<Value, ToolExecutionError> {
        tracing::info!(
            query = %search.query,
            location = ?search.location,
            insurance = ?search.insurance,
            "Searching facilities"
        );
        encode(sample_facilities())
    }

    fn verify_insurance(&self, query: InsuranceQuery) -> Result<Value, ToolExecutionError> {
        // Policy numbers stay out of the logs.
        tracing::info!(provider = %query.provider, "Verifying insurance");
        encode(CoverageReport::standard(query))
    }

    fn intake_assessment(&self, answers: IntakeAnswers) -> Result<Value, ToolExecutionError> {
        tracing::info!(
            substance = %answers.substance,
            usage_frequency = %answers.usage_frequency,
            previous_treatment = answers.previous_treatment,
            "Running intake assessment"
        );
        encode(Assessment::baseline())
    }
}

impl Default for FacilityToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutor for FacilityToolExecutor {
    async fn execute(&self, call: ToolCall) -> Result<ToolResponse, ToolExecutionError> {
        if !self.registry.has_tool(call.name()) {
            tracing::warn!(tool = %call.name(), "Unknown tool requested");
            return Err(ToolExecutionError::UnknownTool(call.name().to_string()));
        }

        let name = call.name().to_string();
        let parameters = call.into_parameters();
        tracing::debug!(tool = %name, "Invoking tool");

        let data = match name.as_str() {
            SEARCH_FACILITIES => self.search_facilities(decode(&name, parameters)?)?,
            VERIFY_INSURANCE => self.verify_insurance(decode(&name, parameters)?)?,
            INTAKE_ASSESSMENT => self.intake_assessment(decode(&name, parameters)?)?,
            _ => return Err(ToolExecutionError::UnknownTool(name)),
        };

        Ok(ToolResponse::success(data))
    }

    fn available_tools(&self) -> Vec<ToolDefinition> {
        self.registry.list().into_iter().cloned().collect()
    }

    fn has_tool(&self, name: &str) -> bool {
        self.registry.has_tool(name)
    }
}

fn decode<T: DeserializeOwned>(tool: &str, parameters: Value) -> Result<T, ToolExecutionError> {
    // A call with no arguments arrives as null; treat it as an empty object so
    // serde reports the missing field instead of a type error.
    let parameters = if parameters.is_null() {
        Value::Object(Default::default())
    } else {
        parameters
    };
    serde_json::from_value(parameters)
        .map_err(|e| ToolExecutionError::invalid_parameters(tool, e.to_string()))
}

fn encode<T: Serialize>(value: T) -> Result<Value, ToolExecutionError> {
    serde_json::to_value(value).map_err(|e| ToolExecutionError::Internal(e.to_string()))
}
