//! Tool call and response types.

use serde::{Deserialize, Serialize};

/// A named tool invocation with untyped JSON arguments.
///
/// Executors decode `parameters` into the tool's own request type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    name: String,
    parameters: serde_json::Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, parameters: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &serde_json::Value {
        &self.parameters
    }

    pub fn into_parameters(self) -> serde_json::Value {
        self.parameters
    }
}

/// Outcome of running a tool: its JSON result, or a message saying why it
/// could not produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse(Result<serde_json::Value, String>);

impl ToolResponse {
    pub fn success(data: serde_json::Value) -> Self {
        Self(Ok(data))
    }

    /// A tool-level failure; the call itself was well-formed.
    pub fn error(message: impl Into<String>) -> Self {
        Self(Err(message.into()))
    }

    pub fn is_success(&self) -> bool {
        self.0.is_ok()
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        self.0.as_ref().ok()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.0.as_ref().err().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_keeps_name_and_arguments() {
        let call = ToolCall::new("search_facilities", serde_json::json!({"query": "detox"}));

        assert_eq!(call.name(), "search_facilities");
        assert_eq!(call.parameters()["query"], "detox");
    }

    #[test]
    fn into_parameters_hands_back_arguments() {
        let call = ToolCall::new("verify_insurance", serde_json::json!({"provider": "Aetna"}));
        let params = call.into_parameters();

        assert_eq!(params["provider"], "Aetna");
    }

    #[test]
    fn success_carries_data_only() {
        let response = ToolResponse::success(serde_json::json!([{"id": "1"}]));

        assert!(response.is_success());
        assert!(response.data().is_some());
        assert!(response.error_message().is_none());
    }

    #[test]
    fn error_carries_message_only() {
        let response = ToolResponse::error("Provider unavailable");

        assert!(!response.is_success());
        assert!(response.data().is_none());
        assert_eq!(response.error_message(), Some("Provider unavailable"));
    }
}
