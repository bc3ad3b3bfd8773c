//! Notion webhook event types.
//!
//! The payload is an untrusted document. Only `type` is required; the
//! facility id and timestamp are carried through as-is.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while turning a verified payload into a [`WebhookEvent`].
#[derive(Debug, Error)]
pub enum WebhookPayloadError {
    /// Body is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Body is JSON but not an object.
    #[error("payload must be a JSON object")]
    NotAnObject,

    /// Required field missing from webhook payload.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field has the wrong JSON type.
    #[error("invalid payload shape: {0}")]
    InvalidShape(#[source] serde_json::Error),
}

/// Facility event types the intake pipeline routes on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FacilityEventKind {
    /// Facility details changed in Notion.
    Updated,
    /// Facility passed verification.
    Verified,
    /// Facility removed from Notion.
    Deleted,
    /// Any other event type; acknowledged without a handler.
    Other(String),
}

impl FacilityEventKind {
    /// Parse event type from string.
    pub fn parse(s: &str) -> Self {
        match s {
            "facility.updated" => Self::Updated,
            "facility.verified" => Self::Verified,
            "facility.deleted" => Self::Deleted,
            other => Self::Other(other.to_string()),
        }
    }

    /// Convert to the wire event type string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Updated => "facility.updated",
            Self::Verified => "facility.verified",
            Self::Deleted => "facility.deleted",
            Self::Other(s) => s,
        }
    }

    /// Returns true for the event types that have a handler.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for FacilityEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FacilityEventKind {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl Serialize for FacilityEventKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FacilityEventKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// Parsed Notion webhook event.
///
/// Unknown payload fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Declared event type.
    #[serde(rename = "type")]
    pub kind: FacilityEventKind,

    /// Facility the event refers to. Numeric ids are kept as their decimal text.
    #[serde(default, deserialize_with = "opaque_id")]
    pub facility_id: Option<String>,

    /// Sender timestamp, passed through untouched.
    #[serde(default)]
    pub timestamp: Value,
}

impl WebhookEvent {
    /// Parses an event from raw request bytes.
    pub fn from_slice(body: &[u8]) -> Result<Self, WebhookPayloadError> {
        let value: Value = serde_json::from_slice(body).map_err(WebhookPayloadError::InvalidJson)?;
        Self::from_value(&value)
    }

    /// Parses an event from an already-decoded JSON document.
    pub fn from_value(value: &Value) -> Result<Self, WebhookPayloadError> {
        let object = value.as_object().ok_or(WebhookPayloadError::NotAnObject)?;
        if !object.contains_key("type") {
            return Err(WebhookPayloadError::MissingField("type"));
        }
        WebhookEvent::deserialize(value).map_err(WebhookPayloadError::InvalidShape)
    }
}

fn opaque_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "facility_id must be a string or number, got {other}"
        ))),
    }
}

/// Builder for creating test payloads.
#[cfg(test)]
pub struct WebhookPayloadBuilder {
    event_type: Option<String>,
    facility_id: Option<Value>,
    timestamp: Option<Value>,
}

#[cfg(test)]
impl Default for WebhookPayloadBuilder {
    fn default() -> Self {
        Self {
            event_type: Some("facility.updated".to_string()),
            facility_id: Some(Value::String("42".to_string())),
            timestamp: Some(Value::String("2024-01-01T00:00:00Z".to_string())),
        }
    }
}

#[cfg(test)]
impl WebhookPayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn without_type(mut self) -> Self {
        self.event_type = None;
        self
    }

    pub fn facility_id(mut self, facility_id: impl Into<Value>) -> Self {
        self.facility_id = Some(facility_id.into());
        self
    }

    pub fn without_facility_id(mut self) -> Self {
        self.facility_id = None;
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<Value>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn build(self) -> Value {
        let mut object = serde_json::Map::new();
        if let Some(event_type) = self.event_type {
            object.insert("type".to_string(), Value::String(event_type));
        }
        if let Some(facility_id) = self.facility_id {
            object.insert("facility_id".to_string(), facility_id);
        }
        if let Some(timestamp) = self.timestamp {
            object.insert("timestamp".to_string(), timestamp);
        }
        Value::Object(object)
    }
}
