//! Notion webhook signature validation.
//!
//! Signatures are the lowercase hex encoding of HMAC-SHA256 over the request
//! body, keyed with the shared webhook secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Validates a presented webhook signature against the payload.
///
/// Fails closed: an empty payload, signature, or secret is never valid.
/// The comparison runs in constant time with respect to the signature
/// contents so mismatches cannot be located by timing.
pub fn validate_signature(payload: &[u8], presented_signature: &str, secret: &str) -> bool {
    if payload.is_empty() || presented_signature.is_empty() || secret.is_empty() {
        return false;
    }

    let Some(expected) = hmac_hex(payload, secret) else {
        return false;
    };

    constant_time_compare(expected.as_bytes(), presented_signature.as_bytes())
}

/// Computes the hex signature a sender attaches for `payload`.
///
/// Returns an empty string when the secret is empty, which never validates.
pub fn compute_signature(payload: &[u8], secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    hmac_hex(payload, secret).unwrap_or_default()
}

fn hmac_hex(payload: &[u8], secret: &str) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(payload);
    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Performs constant-time comparison of two byte slices.
///
/// Only the length is allowed to short-circuit; it is public anyway since
/// every valid signature is 64 hex characters.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
