//! Facility Event Handler Port - Extension point per recognized event type.
//!
//! The webhook dispatcher calls the handler after the signature is verified
//! and the event parsed. Only `facility.updated`, `facility.verified`, and
//! `facility.deleted` reach a handler; other event types are acknowledged
//! without one.

use thiserror::Error;

use crate::domain::webhook::WebhookEvent;

/// Failure inside a facility event handler.
#[derive(Debug, Error)]
pub enum FacilityHandlerError {
    /// The backend the handler talks to refused or failed the call.
    #[error("facility backend error: {0}")]
    Backend(String),
}

/// Handler for verified facility events.
///
/// Implementations must be stateless with respect to individual deliveries.
pub trait FacilityEventHandler: Send + Sync {
    /// Facility details changed.
    fn facility_updated(&self, event: &WebhookEvent) -> Result<(), FacilityHandlerError>;

    /// Facility passed verification.
    fn facility_verified(&self, event: &WebhookEvent) -> Result<(), FacilityHandlerError>;

    /// Facility was removed.
    fn facility_deleted(&self, event: &WebhookEvent) -> Result<(), FacilityHandlerError>;
}
