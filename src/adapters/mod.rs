//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the core to the outside world:
//! - `http` - axum routers for webhooks, tools, and health
//! - `logging` - log sinks and subscriber setup
//! - `secrets` - webhook secret sources
//! - `tools` - tool executor over the facility domain
//! - `webhook` - default facility event handler

pub mod http;
pub mod logging;
pub mod secrets;
pub mod tools;
pub mod webhook;

pub use logging::{init_logging, InMemoryLogSink, LoggingError, TracingLogSink};
pub use secrets::{EnvWebhookSecret, StaticWebhookSecret};
pub use tools::FacilityToolExecutor;
pub use webhook::LoggingFacilityEventHandler;
