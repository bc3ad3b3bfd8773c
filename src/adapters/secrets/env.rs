//! Environment-backed webhook secret.

use secrecy::SecretString;

use crate::ports::WebhookSecretSource;

/// Default variable holding the Notion webhook signing secret.
pub const DEFAULT_SECRET_ENV_VAR: &str = "NOTION_WEBHOOK_SECRET";

/// Reads the webhook secret from an environment variable on every call.
///
/// Rotating the secret only requires changing the variable; nothing is cached.
#[derive(Debug, Clone)]
pub struct EnvWebhookSecret {
    var: String,
}

impl EnvWebhookSecret {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable consulted.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvWebhookSecret {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_ENV_VAR)
    }
}

impl WebhookSecretSource for EnvWebhookSecret {
    fn webhook_secret(&self) -> Option<SecretString> {
        std::env::var(&self.var)
            .ok()
            .filter(|value| !value.is_empty())
            .map(SecretString::new)
    }
}
