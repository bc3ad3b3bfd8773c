//! Default facility event handler.
//!
//! Records that each event was seen. Deployments that sync facility data
//! replace this with their own `FacilityEventHandler`.

use std::sync::Arc;

use crate::domain::webhook::WebhookEvent;
use crate::ports::{FacilityEventHandler, FacilityHandlerError, LogRecord, LogSink};

/// Logs every recognized facility event and never fails.
pub struct LoggingFacilityEventHandler {
    log: Arc<dyn LogSink>,
}

impl LoggingFacilityEventHandler {
    pub fn new(log: Arc<dyn LogSink>) -> Self {
        Self { log }
    }

    fn note(&self, message: &str, event: &WebhookEvent) {
        self.log.record(
            LogRecord::info(message)
                .field("facility_id", event.facility_id.clone())
                .field("event_type", event.kind.as_str()),
        );
    }
}

impl FacilityEventHandler for LoggingFacilityEventHandler {
    fn facility_updated(&self, event: &WebhookEvent) -> Result<(), FacilityHandlerError> {
        self.note("Processing facility update", event);
        Ok(())
    }

    fn facility_verified(&self, event: &WebhookEvent) -> Result<(), FacilityHandlerError> {
        self.note("Processing facility verification", event);
        Ok(())
    }

    fn facility_deleted(&self, event: &WebhookEvent) -> Result<(), FacilityHandlerError> {
        self.note("Processing facility deletion", event);
        Ok(())
    }
}
