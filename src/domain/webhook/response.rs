//! Response envelope returned for accepted webhooks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::event::WebhookEvent;

/// Placeholder used in messages when the payload carried no facility id.
const UNKNOWN_FACILITY: &str = "unknown";

/// Envelope returned to the sender after a webhook is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// Always `"success"` for accepted webhooks.
    pub status: String,
    /// Human-readable summary.
    pub message: String,
    /// Echo of the event's identifying fields.
    pub data: WebhookResponseData,
}

/// Fields echoed from the accepted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookResponseData {
    pub facility_id: Option<String>,
    pub event_type: String,
    pub timestamp: Value,
}

impl WebhookResponse {
    /// Builds the success envelope for a processed event.
    pub fn processed(event: &WebhookEvent) -> Self {
        let facility = event.facility_id.as_deref().unwrap_or(UNKNOWN_FACILITY);
        Self {
            status: "success".to_string(),
            message: format!("Processed {} event for facility {}", event.kind, facility),
            data: WebhookResponseData {
                facility_id: event.facility_id.clone(),
                event_type: event.kind.to_string(),
                timestamp: event.timestamp.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::webhook::FacilityEventKind;
    use serde_json::json;

    fn event(kind: &str, facility_id: Option<&str>) -> WebhookEvent {
        WebhookEvent {
            kind: FacilityEventKind::parse(kind),
            facility_id: facility_id.map(String::from),
            timestamp: json!(1704067200),
        }
    }

    #[test]
    fn processed_message_names_event_and_facility() {
        let response = WebhookResponse::processed(&event("facility.updated", Some("42")));

        assert_eq!(response.status, "success");
        assert_eq!(response.message, "Processed facility.updated event for facility 42");
    }

    #[test]
    fn processed_echoes_event_fields() {
        let response = WebhookResponse::processed(&event("facility.verified", Some("9")));

        assert_eq!(response.data.facility_id.as_deref(), Some("9"));
        assert_eq!(response.data.event_type, "facility.verified");
        assert_eq!(response.data.timestamp, json!(1704067200));
    }

    #[test]
    fn missing_facility_reads_as_unknown() {
        let response = WebhookResponse::processed(&event("facility.deleted", None));

        assert!(response.message.ends_with("for facility unknown"));
        assert!(response.data.facility_id.is_none());
    }

    #[test]
    fn serializes_to_documented_shape() {
        let response = WebhookResponse::processed(&event("facility.updated", Some("42")));

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            json!({
                "status": "success",
                "message": "Processed facility.updated event for facility 42",
                "data": {
                    "facility_id": "42",
                    "event_type": "facility.updated",
                    "timestamp": 1704067200
                }
            })
        );
    }
}
