//! Notion webhook domain module.
//!
//! # Module Structure
//!
//! - `signature` - HMAC-SHA256 signature validation
//! - `event` - Typed webhook event and facility event kinds
//! - `headers` - Case-insensitive request header map
//! - `outcome` - Accepted/rejected result and rejection kinds
//! - `response` - Success envelope returned to the sender

mod event;
mod headers;
mod outcome;
mod response;
mod signature;

pub use event::{FacilityEventKind, WebhookEvent, WebhookPayloadError};
pub use headers::{RequestHeaders, NOTION_SIGNATURE_HEADER};
pub use outcome::{RejectionKind, WebhookOutcome};
pub use response::{WebhookResponse, WebhookResponseData};
pub use signature::{compute_signature, validate_signature};

#[cfg(test)]
pub use event::WebhookPayloadBuilder;
