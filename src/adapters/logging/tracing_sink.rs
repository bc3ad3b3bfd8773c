//! Log sink backed by `tracing`.
//!
//! Records become tracing events under the `webhook` target. The structured
//! context is rendered as a JSON object in the `context` field and the error
//! chain, when present, in the `error` field.

use tracing::{debug, error, info, warn};

use crate::ports::{LogLevel, LogRecord, LogSink};

/// Log sink that forwards records to the global tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl TracingLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingLogSink {
    fn record(&self, record: LogRecord) {
        let context = record.context_json().unwrap_or_default();
        let context = context.as_str();
        let err = record.error.as_deref().unwrap_or_default();
        let message = record.message.as_str();

        match (record.level, record.error.is_some()) {
            (LogLevel::Debug, _) => debug!(target: "webhook", context, "{message}"),
            (LogLevel::Info, _) => info!(target: "webhook", context, "{message}"),
            (LogLevel::Warn, false) => warn!(target: "webhook", context, "{message}"),
            (LogLevel::Warn, true) => warn!(target: "webhook", context, error = err, "{message}"),
            (LogLevel::Error, false) => error!(target: "webhook", context, "{message}"),
            (LogLevel::Error, true) => error!(target: "webhook", context, error = err, "{message}"),
        }
    }
}
