//! Ordered startup of the service.

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::Metrics;

/// Errors that stop the service from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to build metrics registry: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Build the registry, bind the listener and serve until a signal arrives.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    let metrics = Metrics::new()?;

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    HttpServer::new(config, metrics)
        .run(listener, shutdown.signalled())
        .await?;

    Ok(())
}
