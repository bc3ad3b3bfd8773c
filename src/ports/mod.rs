//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Webhook Ports
//!
//! - `LogSink` - Structured log output for the webhook pipeline
//! - `WebhookSecretSource` - Shared signing secret lookup
//! - `FacilityEventHandler` - Per-event-type extension points
//!
//! ## Tool Ports
//!
//! - `ToolExecutor` - Executes the facility tools by name

mod facility_event_handler;
mod log_sink;
mod tool_executor;
mod webhook_secret_source;

pub use facility_event_handler::{FacilityEventHandler, FacilityHandlerError};
pub use log_sink::{LogLevel, LogRecord, LogSink};
pub use tool_executor::{ToolExecutionError, ToolExecutor};
pub use webhook_secret_source::WebhookSecretSource;
