//! Webhook secret sources.
//!
//! - `EnvWebhookSecret` - re-reads an environment variable per delivery
//! - `StaticWebhookSecret` - fixed value, for tests and embedding

mod env;
mod static_secret;

pub use env::{EnvWebhookSecret, DEFAULT_SECRET_ENV_VAR};
pub use static_secret::StaticWebhookSecret;
