//! Fixed webhook secret, loaded once.

use secrecy::{ExposeSecret, SecretString};

use crate::ports::WebhookSecretSource;

/// Holds a secret for the lifetime of the process.
pub struct StaticWebhookSecret {
    secret: Option<SecretString>,
}

impl StaticWebhookSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(SecretString::new(secret.into())),
        }
    }

    /// A source with no secret configured.
    pub fn unset() -> Self {
        Self { secret: None }
    }
}

impl WebhookSecretSource for StaticWebhookSecret {
    fn webhook_secret(&self) -> Option<SecretString> {
        self.secret
            .as_ref()
            .filter(|s| !s.expose_secret().is_empty())
            .map(|s| SecretString::new(s.expose_secret().clone()))
    }
}
