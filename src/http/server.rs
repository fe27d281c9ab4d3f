//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing)
//! - Bind server to listener
//! - Expose `/healthz` and `/metrics` next to the catch-all page handler

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::health;
use crate::http::handler::error_page;
use crate::observability::Metrics;

/// Content type of the Prometheus text format.
const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub root: Arc<Path>,
    pub metrics: Metrics,
    pub debug_headers: bool,
}

/// HTTP server for the error page backend.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and registry.
    pub fn new(config: ServiceConfig, metrics: Metrics) -> Self {
        let state = AppState {
            root: Arc::from(PathBuf::from(&config.pages.root)),
            metrics,
            debug_headers: config.pages.debug_headers,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let mut router = Router::new().route("/healthz", get(health::healthz));

        if config.observability.metrics_enabled {
            router = router.route("/metrics", get(metrics_handler));
        }

        router
            .route("/", any(error_page))
            .route("/{*path}", any(error_page))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            root = %self.config.pages.root,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)],
        state.metrics.render(),
    )
}
