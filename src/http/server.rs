//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router delegating every path to the framework pipeline
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener and serve with graceful shutdown
//! - Convert committed pipeline output to an HTTP response

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::app::App;
use crate::config::ServerConfig;

/// HTTP server wrapping a framework [`App`].
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving the given application.
    pub fn new(app: App, config: ServerConfig) -> Self {
        let router = Self::build_router(&config, Arc::new(app));
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, app: Arc<App>) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(app)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Catch-all handler: every request path goes through the pipeline.
async fn dispatch_handler(State(app): State<Arc<App>>, uri: Uri) -> impl IntoResponse {
    let path = uri.path();
    tracing::debug!(path, "Dispatching request");

    let committed = app.handle(path);

    let status = match StatusCode::from_u16(committed.status) {
        Ok(status) => status,
        Err(_) => {
            tracing::error!(status = committed.status, "Handler set an illegal status code");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, committed.body)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
    tracing::info!("Shutdown signal received");
}
