//! Webhook intake configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where the Notion webhook secret and signature are found.
///
/// The secret itself is never part of the loaded configuration; only the
/// name of the variable holding it is. It is read per delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Environment variable holding the shared signing secret
    #[serde(default = "default_secret_env_var")]
    pub secret_env_var: String,

    /// Request header carrying the hex signature
    #[serde(default = "default_signature_header")]
    pub signature_header: String,
}

impl WebhookConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret_env_var.trim().is_empty() {
            return Err(ValidationError::MissingRequired("webhook.secret_env_var"));
        }
        if self.signature_header.trim().is_empty() {
            return Err(ValidationError::MissingRequired("webhook.signature_header"));
        }
        if http::HeaderName::from_bytes(self.signature_header.as_bytes()).is_err() {
            return Err(ValidationError::InvalidHeaderName(
                self.signature_header.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            secret_env_var: default_secret_env_var(),
            signature_header: default_signature_header(),
        }
    }
}

fn default_secret_env_var() -> String {
    crate::adapters::secrets::DEFAULT_SECRET_ENV_VAR.to_string()
}

fn default_signature_header() -> String {
    crate::domain::webhook::NOTION_SIGNATURE_HEADER.to_string()
}
