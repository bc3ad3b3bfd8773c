//! Logging adapters.
//!
//! - `TracingLogSink` - forwards webhook log records to `tracing`
//! - `InMemoryLogSink` - keeps records for inspection
//! - [`init_logging`] - installs the process-wide tracing subscriber
//!
//! Output goes to stdout, plus the configured log file when one is set.
//! The filter comes from `RUST_LOG` when present, otherwise from the
//! configured default directive.

mod in_memory;
mod tracing_sink;

pub use in_memory::InMemoryLogSink;
pub use tracing_sink::TracingLogSink;

use std::fs::OpenOptions;
use std::io;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::{LogFormat, LoggingConfig};

/// Guard to track if logging has been initialized
static INIT_GUARD: OnceLock<()> = OnceLock::new();

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file: {0}")]
    FileOpen(#[from] io::Error),
    #[error("failed to parse log filter: {0}")]
    FilterParse(#[from] tracing_subscriber::filter::ParseError),
    #[error("logging already initialized")]
    AlreadyInitialized,
    #[error("failed to initialize subscriber: {0}")]
    TryInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup; later calls return [`LoggingError::AlreadyInitialized`].
///
/// # Errors
///
/// Returns an error if the filter directive is invalid, the log file cannot
/// be opened for appending, or another subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, default_filter: &str) -> Result<(), LoggingError> {
    if INIT_GUARD.set(()).is_err() {
        return Err(LoggingError::AlreadyInitialized);
    }

    let filter = build_env_filter(default_filter)?;
    let layers = build_layers(config)?;

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(())
}

fn build_env_filter(default_filter: &str) -> Result<EnvFilter, LoggingError> {
    match std::env::var("RUST_LOG") {
        Ok(filter) if !filter.trim().is_empty() => Ok(EnvFilter::try_new(filter)?),
        _ => Ok(EnvFilter::try_new(default_filter)?),
    }
}

fn build_layers(config: &LoggingConfig) -> Result<Vec<BoxedLayer>, LoggingError> {
    let mut layers = vec![fmt_layer(config.format, io::stdout, true)];

    if let Some(path) = config.log_file() {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        layers.push(fmt_layer(config.format, Mutex::new(file), false));
    }

    Ok(layers)
}

fn fmt_layer<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Plaintext => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_filter_is_parsed() {
        assert!(EnvFilter::try_new("info,soberbookings=debug").is_ok());
    }

    #[test]
    fn file_output_adds_second_layer() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("soberbookings.log");
        let config = LoggingConfig {
            format: LogFormat::Json,
            file: Some(path.clone()),
        };

        let layers = build_layers(&config).unwrap();

        assert_eq!(layers.len(), 2);
        assert!(path.exists());
    }

    #[test]
    fn stdout_only_without_file() {
        let config = LoggingConfig {
            format: LogFormat::Plaintext,
            file: None,
        };

        assert_eq!(build_layers(&config).unwrap().len(), 1);
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            format: LogFormat::Plaintext,
            // A directory cannot be opened as a log file.
            file: Some(dir.path().to_path_buf()),
        };

        assert!(matches!(build_layers(&config), Err(LoggingError::FileOpen(_))));
    }
}
