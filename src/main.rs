//! SoberBookings server binary.
//!
//! Loads configuration, installs logging, wires the webhook dispatcher and
//! the facility tool executor, and serves the HTTP API until Ctrl+C or
//! SIGTERM.

use std::sync::Arc;

use axum::http::HeaderValue;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use soberbookings::adapters::http::{api_router, ToolsAppState, WebhookAppState};
use soberbookings::adapters::{
    init_logging, EnvWebhookSecret, FacilityToolExecutor, LoggingError,
    LoggingFacilityEventHandler, TracingLogSink,
};
use soberbookings::application::NotionWebhookDispatcher;
use soberbookings::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use soberbookings::ports::LogSink;

/// Failures that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_logging(&config.logging, &config.server.log_level)?;
    info!(
        environment = ?config.server.environment,
        log_file = ?config.logging.log_file(),
        "Configuration loaded"
    );

    let log: Arc<dyn LogSink> = Arc::new(TracingLogSink::new());
    let secrets = EnvWebhookSecret::new(&config.webhook.secret_env_var);
    if std::env::var_os(secrets.var()).is_none() {
        // Deliveries are rejected until the variable is set; the server still starts.
        warn!(var = %secrets.var(), "Webhook secret is not set");
    }

    let dispatcher = NotionWebhookDispatcher::new(
        Arc::new(secrets),
        Arc::new(LoggingFacilityEventHandler::new(log.clone())),
        log,
    )
    .with_signature_header(&config.webhook.signature_header);

    let app = api_router(
        WebhookAppState::new(Arc::new(dispatcher)),
        ToolsAppState::new(Arc::new(FacilityToolExecutor::new())),
    )
    .layer(TraceLayer::new_for_http())
    .layer(TimeoutLayer::new(config.server.request_timeout()))
    .layer(cors_layer(&config.server));

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// Wait for shutdown signal.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}
