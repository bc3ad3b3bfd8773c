//! Webhook Secret Source Port - Where the shared signing secret comes from.
//!
//! Consulted once per delivery. Returning `None` means the secret is not
//! configured, which the webhook pipeline treats as a rejection.

use secrecy::SecretString;

/// Port for reading the shared webhook signing secret.
pub trait WebhookSecretSource: Send + Sync {
    /// Returns the current secret, or `None` when unset or empty.
    fn webhook_secret(&self) -> Option<SecretString>;
}
