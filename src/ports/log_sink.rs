//! Log Sink Port - Structured logging capability injected into the core.
//!
//! The webhook pipeline never touches a global logger. It is handed a
//! `LogSink` at construction and emits [`LogRecord`]s through it; where they
//! end up (tracing subscriber, memory buffer) is the adapter's business.

use std::error::Error as StdError;

use serde::Serialize;
use serde_json::{Map, Value};

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// One structured log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    /// Key/value context, in insertion order.
    pub fields: Map<String, Value>,
    /// Rendered error chain when the record reports a failure.
    pub error: Option<String>,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            fields: Map::new(),
            error: None,
        }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Debug, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    /// Adds a context field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Attaches an error and its source chain, outermost first.
    pub fn with_error(mut self, err: &(dyn StdError + 'static)) -> Self {
        let mut chain = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push_str(": ");
            chain.push_str(&cause.to_string());
            source = cause.source();
        }
        self.error = Some(chain);
        self
    }

    /// Looks up a context field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Renders the fields as a compact JSON object, or `None` without fields.
    pub fn context_json(&self) -> Option<String> {
        if self.fields.is_empty() {
            None
        } else {
            serde_json::to_string(&self.fields).ok()
        }
    }
}

/// Port for emitting structured log records.
pub trait LogSink: Send + Sync {
    fn record(&self, record: LogRecord);
}
