//! Outcome of webhook handling.
//!
//! Every failure collapses into [`WebhookOutcome::Rejected`]. The kind is for
//! operators; callers outside the process only learn that the webhook was
//! rejected.

use thiserror::Error;

use super::response::WebhookResponse;

/// Why a webhook was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectionKind {
    /// Signature header absent or empty.
    #[error("Missing signature header")]
    MissingSignature,

    /// Shared secret not configured.
    #[error("Webhook secret not configured")]
    MissingSecret,

    /// Computed and presented signatures differ.
    #[error("Invalid webhook signature")]
    SignatureMismatch,

    /// Parsing, handling, or response building failed after verification.
    #[error("Error processing webhook")]
    InternalDispatchFault,
}

impl RejectionKind {
    /// Stable label used in structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingSignature => "missing_signature",
            Self::MissingSecret => "missing_secret",
            Self::SignatureMismatch => "signature_mismatch",
            Self::InternalDispatchFault => "internal_dispatch_fault",
        }
    }

    /// Returns true when the rejection points at our own configuration or
    /// code rather than at the sender.
    pub fn is_server_fault(&self) -> bool {
        matches!(self, Self::MissingSecret | Self::InternalDispatchFault)
    }
}

/// Result of handling one webhook delivery.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookOutcome {
    Accepted(WebhookResponse),
    Rejected(RejectionKind),
}

impl WebhookOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Returns the response for accepted webhooks.
    pub fn response(&self) -> Option<&WebhookResponse> {
        match self {
            Self::Accepted(response) => Some(response),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the rejection kind for rejected webhooks.
    pub fn rejection(&self) -> Option<RejectionKind> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(kind) => Some(*kind),
        }
    }
}
