//! NotionWebhookDispatcher - Verifies and routes Notion facility webhooks.
//!
//! ## Pipeline
//!
//! 1. Read the signature header
//! 2. Read the shared secret
//! 3. Verify HMAC-SHA256 of the body bytes
//! 4. Parse the event and call the handler for its type
//! 5. Build the success envelope
//!
//! Each step either continues or ends in [`WebhookOutcome::Rejected`]. Nothing
//! is retried and nothing is stored between deliveries.
//!
//! ## Verification bytes
//!
//! [`NotionWebhookDispatcher::handle_raw`] verifies the literal request body
//! and is what the HTTP adapter uses. [`NotionWebhookDispatcher::handle`]
//! accepts an already-decoded document and re-encodes it as compact JSON with
//! keys in their original order (`serde_json::to_vec` with `preserve_order`).
//! That only verifies when the sender signed exactly that encoding.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use thiserror::Error;

use crate::domain::webhook::{
    validate_signature, FacilityEventKind, RejectionKind, RequestHeaders, WebhookEvent,
    WebhookOutcome, WebhookPayloadError, WebhookResponse, NOTION_SIGNATURE_HEADER,
};
use crate::ports::{FacilityEventHandler, FacilityHandlerError, LogRecord, LogSink, WebhookSecretSource};

/// Source tag attached to webhook log records.
const SOURCE: &str = "notion";

/// Failures after the signature has been verified.
#[derive(Debug, Error)]
enum DispatchError {
    #[error("malformed webhook payload")]
    Payload(#[from] WebhookPayloadError),

    #[error("{event_type} handler failed")]
    Handler {
        event_type: &'static str,
        #[source]
        source: FacilityHandlerError,
    },

    #[error("failed to encode payload for verification")]
    Encoding(#[source] serde_json::Error),
}

/// Verifies Notion webhook deliveries and routes them by event type.
///
/// Stateless: one instance is shared across all requests.
pub struct NotionWebhookDispatcher {
    secrets: Arc<dyn WebhookSecretSource>,
    handler: Arc<dyn FacilityEventHandler>,
    log: Arc<dyn LogSink>,
    signature_header: String,
}

impl NotionWebhookDispatcher {
    pub fn new(
        secrets: Arc<dyn WebhookSecretSource>,
        handler: Arc<dyn FacilityEventHandler>,
        log: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            secrets,
            handler,
            log,
            signature_header: NOTION_SIGNATURE_HEADER.to_string(),
        }
    }

    /// Reads the signature from a different header name.
    pub fn with_signature_header(mut self, name: impl Into<String>) -> Self {
        self.signature_header = name.into();
        self
    }

    /// Handles a delivery using the raw request body for verification.
    pub fn handle_raw(&self, body: &[u8], headers: &RequestHeaders) -> WebhookOutcome {
        let (signature, secret) = match self.credentials(headers) {
            Ok(credentials) => credentials,
            Err(kind) => return WebhookOutcome::Rejected(kind),
        };
        if let Err(kind) = self.verify(body, &signature, &secret) {
            return WebhookOutcome::Rejected(kind);
        }
        self.finish(WebhookEvent::from_slice(body).map_err(DispatchError::from))
    }

    /// Handles a delivery whose body was already decoded.
    ///
    /// The document is re-encoded as compact JSON before verification.
    pub fn handle(&self, payload: &Value, headers: &RequestHeaders) -> WebhookOutcome {
        let (signature, secret) = match self.credentials(headers) {
            Ok(credentials) => credentials,
            Err(kind) => return WebhookOutcome::Rejected(kind),
        };
        let body = match serde_json::to_vec(payload) {
            Ok(body) => body,
            Err(err) => return self.fault(DispatchError::Encoding(err)),
        };
        if let Err(kind) = self.verify(&body, &signature, &secret) {
            return WebhookOutcome::Rejected(kind);
        }
        self.finish(WebhookEvent::from_value(payload).map_err(DispatchError::from))
    }

    fn credentials(&self, headers: &RequestHeaders) -> Result<(String, SecretString), RejectionKind> {
        let signature = match headers.get(&self.signature_header) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => return Err(self.reject(RejectionKind::MissingSignature)),
        };

        let secret = match self.secrets.webhook_secret() {
            Some(secret) if !secret.expose_secret().is_empty() => secret,
            _ => return Err(self.reject(RejectionKind::MissingSecret)),
        };

        Ok((signature, secret))
    }

    fn verify(&self, body: &[u8], signature: &str, secret: &SecretString) -> Result<(), RejectionKind> {
        if !validate_signature(body, signature, secret.expose_secret()) {
            return Err(self.reject(RejectionKind::SignatureMismatch));
        }
        self.log
            .record(LogRecord::info("Webhook signature validated").field("source", SOURCE));
        Ok(())
    }

    fn finish(&self, parsed: Result<WebhookEvent, DispatchError>) -> WebhookOutcome {
        match parsed.and_then(|event| self.route(&event)) {
            Ok(response) => WebhookOutcome::Accepted(response),
            Err(err) => self.fault(err),
        }
    }

    fn route(&self, event: &WebhookEvent) -> Result<WebhookResponse, DispatchError> {
        self.log.record(
            LogRecord::info(format!("Received {} event", event.kind))
                .field("facility_id", event.facility_id.clone()),
        );

        let result = match &event.kind {
            FacilityEventKind::Updated => self.handler.facility_updated(event),
            FacilityEventKind::Verified => self.handler.facility_verified(event),
            FacilityEventKind::Deleted => self.handler.facility_deleted(event),
            FacilityEventKind::Other(event_type) => {
                self.log.record(
                    LogRecord::debug("No handler for event type")
                        .field("event_type", event_type.as_str()),
                );
                Ok(())
            }
        };

        result.map_err(|source| DispatchError::Handler {
            event_type: handler_name(&event.kind),
            source,
        })?;

        Ok(WebhookResponse::processed(event))
    }

    fn reject(&self, kind: RejectionKind) -> RejectionKind {
        self.log.record(
            LogRecord::error(kind.to_string())
                .field("kind", kind.as_str())
                .field("source", SOURCE),
        );
        kind
    }

    fn fault(&self, err: DispatchError) -> WebhookOutcome {
        let kind = RejectionKind::InternalDispatchFault;
        self.log.record(
            LogRecord::error(kind.to_string())
                .field("kind", kind.as_str())
                .field("source", SOURCE)
                .with_error(&err),
        );
        WebhookOutcome::Rejected(kind)
    }
}

fn handler_name(kind: &FacilityEventKind) -> &'static str {
    match kind {
        FacilityEventKind::Updated => "facility.updated",
        FacilityEventKind::Verified => "facility.verified",
        FacilityEventKind::Deleted => "facility.deleted",
        FacilityEventKind::Other(_) => "unrecognized",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logging::InMemoryLogSink;
    use crate::adapters::secrets::StaticWebhookSecret;
    use crate::adapters::webhook::LoggingFacilityEventHandler;
    use crate::domain::webhook::{compute_signature, WebhookPayloadBuilder};
    use crate::ports::LogLevel;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    const TEST_SECRET: &str = "notion_test_secret";

    // ══════════════════════════════════════════════════════════════
    // Test Infrastructure
    // ══════════════════════════════════════════════════════════════

    /// Handler that counts calls per event type.
    #[derive(Default)]
    struct CountingHandler {
        updated: AtomicU32,
        verified: AtomicU32,
        deleted: AtomicU32,
        fail: bool,
    }

    impl CountingHandler {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn total(&self) -> u32 {
            self.updated.load(Ordering::SeqCst)
                + self.verified.load(Ordering::SeqCst)
                + self.deleted.load(Ordering::SeqCst)
        }

        fn bump(&self, counter: &AtomicU32) -> Result<(), FacilityHandlerError> {
            counter.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(FacilityHandlerError::Backend("directory offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl FacilityEventHandler for CountingHandler {
        fn facility_updated(&self, _event: &WebhookEvent) -> Result<(), FacilityHandlerError> {
            self.bump(&self.updated)
        }

        fn facility_verified(&self, _event: &WebhookEvent) -> Result<(), FacilityHandlerError> {
            self.bump(&self.verified)
        }

        fn facility_deleted(&self, _event: &WebhookEvent) -> Result<(), FacilityHandlerError> {
            self.bump(&self.deleted)
        }
    }

    struct Fixture {
        dispatcher: NotionWebhookDispatcher,
        log: Arc<InMemoryLogSink>,
        handler: Arc<CountingHandler>,
    }

    fn fixture_with(secret: Option<&str>, handler: CountingHandler) -> Fixture {
        let log = Arc::new(InMemoryLogSink::new());
        let handler = Arc::new(handler);
        let secrets = match secret {
            Some(s) => StaticWebhookSecret::new(s),
            None => StaticWebhookSecret::unset(),
        };
        let dispatcher =
            NotionWebhookDispatcher::new(Arc::new(secrets), handler.clone(), log.clone());
        Fixture {
            dispatcher,
            log,
            handler,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(Some(TEST_SECRET), CountingHandler::default())
    }

    fn signed_headers(payload: &Value) -> RequestHeaders {
        let body = serde_json::to_vec(payload).unwrap();
        RequestHeaders::new().with(NOTION_SIGNATURE_HEADER, compute_signature(&body, TEST_SECRET))
    }

    fn has_kind(log: &InMemoryLogSink, kind: RejectionKind) -> bool {
        log.records()
            .iter()
            .any(|r| r.level == LogLevel::Error && r.get("kind") == Some(&json!(kind.as_str())))
    }

    // ══════════════════════════════════════════════════════════════
    // Rejection Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn missing_signature_header_is_rejected_and_logged() {
        let f = fixture();
        let payload = WebhookPayloadBuilder::new().build();

        let outcome = f.dispatcher.handle(&payload, &RequestHeaders::new());

        assert_eq!(outcome, WebhookOutcome::Rejected(RejectionKind::MissingSignature));
        assert!(has_kind(&f.log, RejectionKind::MissingSignature));
        assert_eq!(f.handler.total(), 0);
    }

    #[test]
    fn blank_signature_header_counts_as_missing() {
        let f = fixture();
        let payload = WebhookPayloadBuilder::new().build();
        let headers = RequestHeaders::new().with(NOTION_SIGNATURE_HEADER, "  ");

        let outcome = f.dispatcher.handle(&payload, &headers);

        assert_eq!(outcome.rejection(), Some(RejectionKind::MissingSignature));
    }

    #[test]
    fn missing_secret_is_rejected_and_logged() {
        let f = fixture_with(None, CountingHandler::default());
        let payload = WebhookPayloadBuilder::new().build();

        let outcome = f.dispatcher.handle(&payload, &signed_headers(&payload));

        assert_eq!(outcome.rejection(), Some(RejectionKind::MissingSecret));
        assert!(has_kind(&f.log, RejectionKind::MissingSecret));
    }

    #[test]
    fn empty_secret_is_treated_as_missing() {
        let f = fixture_with(Some(""), CountingHandler::default());
        let payload = WebhookPayloadBuilder::new().build();

        let outcome = f.dispatcher.handle(&payload, &signed_headers(&payload));

        assert_eq!(outcome.rejection(), Some(RejectionKind::MissingSecret));
    }

    #[test]
    fn wrong_signature_is_rejected_and_logged() {
        let f = fixture();
        let payload = WebhookPayloadBuilder::new().build();
        let headers = RequestHeaders::new().with(NOTION_SIGNATURE_HEADER, "a".repeat(64));

        let outcome = f.dispatcher.handle(&payload, &headers);

        assert_eq!(outcome.rejection(), Some(RejectionKind::SignatureMismatch));
        assert!(has_kind(&f.log, RejectionKind::SignatureMismatch));
        assert_eq!(f.handler.total(), 0);
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let f = fixture();
        let original = WebhookPayloadBuilder::new().facility_id("42").build();
        let tampered = WebhookPayloadBuilder::new().facility_id("43").build();

        let outcome = f.dispatcher.handle(&tampered, &signed_headers(&original));

        assert_eq!(outcome.rejection(), Some(RejectionKind::SignatureMismatch));
    }

    #[test]
    fn secret_never_appears_in_logs() {
        let f = fixture();
        let payload = WebhookPayloadBuilder::new().build();
        f.dispatcher.handle(&payload, &signed_headers(&payload));
        f.dispatcher.handle(&payload, &RequestHeaders::new());

        for record in f.log.records() {
            let rendered = serde_json::to_string(&record).unwrap();
            assert!(!rendered.contains(TEST_SECRET));
        }
    }

    // ══════════════════════════════════════════════════════════════
    // Dispatch Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn facility_updated_returns_success_envelope() {
        let f = fixture();
        let payload = WebhookPayloadBuilder::new()
            .event_type("facility.updated")
            .facility_id("42")
            .build();

        let outcome = f.dispatcher.handle(&payload, &signed_headers(&payload));

        let response = outcome.response().expect("accepted");
        assert_eq!(response.status, "success");
        assert!(response.message.contains("facility.updated"));
        assert!(response.message.contains("42"));
        assert_eq!(response.data.facility_id.as_deref(), Some("42"));
        assert_eq!(f.handler.updated.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn each_recognized_type_reaches_its_handler() {
        let f = fixture();
        for event_type in ["facility.updated", "facility.verified", "facility.deleted"] {
            let payload = WebhookPayloadBuilder::new().event_type(event_type).build();
            assert!(f.dispatcher.handle(&payload, &signed_headers(&payload)).is_accepted());
        }

        assert_eq!(f.handler.updated.load(Ordering::SeqCst), 1);
        assert_eq!(f.handler.verified.load(Ordering::SeqCst), 1);
        assert_eq!(f.handler.deleted.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unrecognized_type_still_succeeds_without_handler() {
        let f = fixture();
        let payload = WebhookPayloadBuilder::new()
            .event_type("facility.archived")
            .build();

        let outcome = f.dispatcher.handle(&payload, &signed_headers(&payload));

        let response = outcome.response().expect("accepted");
        assert_eq!(response.status, "success");
        assert_eq!(response.data.event_type, "facility.archived");
        assert_eq!(f.handler.total(), 0);
    }

    #[test]
    fn success_logs_validation_with_source_tag() {
        let f = fixture();
        let payload = WebhookPayloadBuilder::new().build();

        f.dispatcher.handle(&payload, &signed_headers(&payload));

        let validated = f
            .log
            .records()
            .into_iter()
            .find(|r| r.message == "Webhook signature validated")
            .expect("validation logged");
        assert_eq!(validated.get("source"), Some(&json!("notion")));
    }

    #[test]
    fn identical_deliveries_produce_identical_responses() {
        let f = fixture();
        let payload = WebhookPayloadBuilder::new().build();
        let headers = signed_headers(&payload);

        let first = f.dispatcher.handle(&payload, &headers);
        let second = f.dispatcher.handle(&payload, &headers);

        assert!(first.is_accepted());
        assert_eq!(first, second);
    }

    // ══════════════════════════════════════════════════════════════
    // Internal Fault Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn handler_failure_becomes_internal_fault() {
        let f = fixture_with(Some(TEST_SECRET), CountingHandler::failing());
        let payload = WebhookPayloadBuilder::new().event_type("facility.deleted").build();

        let outcome = f.dispatcher.handle(&payload, &signed_headers(&payload));

        assert_eq!(outcome.rejection(), Some(RejectionKind::InternalDispatchFault));
        let fault = f
            .log
            .records()
            .into_iter()
            .find(|r| r.get("kind") == Some(&json!("internal_dispatch_fault")))
            .expect("fault logged");
        assert_eq!(
            fault.error.as_deref(),
            Some("facility.deleted handler failed: facility backend error: directory offline")
        );
    }

    #[test]
    fn signed_payload_without_type_is_internal_fault() {
        let f = fixture();
        let payload = WebhookPayloadBuilder::new().without_type().build();

        let outcome = f.dispatcher.handle(&payload, &signed_headers(&payload));

        assert_eq!(outcome.rejection(), Some(RejectionKind::InternalDispatchFault));
    }

    #[test]
    fn signed_non_object_payload_is_internal_fault() {
        let f = fixture();
        let payload = json!(["facility.updated"]);

        let outcome = f.dispatcher.handle(&payload, &signed_headers(&payload));

        assert_eq!(outcome.rejection(), Some(RejectionKind::InternalDispatchFault));
    }

    // ══════════════════════════════════════════════════════════════
    // Raw Body Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn raw_body_verifies_exact_sender_bytes() {
        let f = fixture();
        // Pretty-printed body: re-encoding would not reproduce these bytes.
        let body = b"{\n  \"type\": \"facility.verified\",\n  \"facility_id\": \"7\"\n}";
        let headers = RequestHeaders::new()
            .with(NOTION_SIGNATURE_HEADER, compute_signature(body, TEST_SECRET));

        let outcome = f.dispatcher.handle_raw(body, &headers);

        let response = outcome.response().expect("accepted");
        assert_eq!(response.data.event_type, "facility.verified");
        assert_eq!(response.data.facility_id.as_deref(), Some("7"));
    }

    #[test]
    fn reencoding_differently_formatted_body_fails_verification() {
        let f = fixture();
        let body = b"{\n  \"type\": \"facility.verified\",\n  \"facility_id\": \"7\"\n}";
        let headers = RequestHeaders::new()
            .with(NOTION_SIGNATURE_HEADER, compute_signature(body, TEST_SECRET));
        let parsed: Value = serde_json::from_slice(body).unwrap();

        let outcome = f.dispatcher.handle(&parsed, &headers);

        assert_eq!(outcome.rejection(), Some(RejectionKind::SignatureMismatch));
    }

    #[test]
    fn raw_invalid_json_with_valid_signature_is_internal_fault() {
        let f = fixture();
        let body = b"not json";
        let headers = RequestHeaders::new()
            .with(NOTION_SIGNATURE_HEADER, compute_signature(body, TEST_SECRET));

        let outcome = f.dispatcher.handle_raw(body, &headers);

        assert_eq!(outcome.rejection(), Some(RejectionKind::InternalDispatchFault));
    }

    #[test]
    fn raw_empty_body_is_rejected_as_mismatch() {
        let f = fixture();
        let headers = RequestHeaders::new().with(NOTION_SIGNATURE_HEADER, "a".repeat(64));

        let outcome = f.dispatcher.handle_raw(b"", &headers);

        assert_eq!(outcome.rejection(), Some(RejectionKind::SignatureMismatch));
    }

    #[test]
    fn custom_signature_header_is_honoured() {
        let log = Arc::new(InMemoryLogSink::new());
        let dispatcher = NotionWebhookDispatcher::new(
            Arc::new(StaticWebhookSecret::new(TEST_SECRET)),
            Arc::new(LoggingFacilityEventHandler::new(log.clone())),
            log,
        )
        .with_signature_header("X-Signature");
        let payload = WebhookPayloadBuilder::new().build();
        let body = serde_json::to_vec(&payload).unwrap();
        let headers =
            RequestHeaders::new().with("x-signature", compute_signature(&body, TEST_SECRET));

        assert!(dispatcher.handle(&payload, &headers).is_accepted());
    }
}
