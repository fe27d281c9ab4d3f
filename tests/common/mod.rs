//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;

use custom_error_pages::config::ServiceConfig;
use custom_error_pages::http::HttpServer;
use custom_error_pages::lifecycle::Shutdown;
use custom_error_pages::observability::metrics::REQUEST_COUNT;
use custom_error_pages::observability::Metrics;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Create a page root holding `files` as `(name, contents)` pairs.
pub fn page_root(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).expect("Failed to write page");
    }
    dir
}

/// Config pointing at `root`, listening on an ephemeral port.
pub fn test_config(root: &Path) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.pages.root = root.to_string_lossy().into_owned();
    config
}

/// Start a server for `config`; it stops when `shutdown` is triggered.
#[allow(dead_code)]
pub async fn start_server(config: ServiceConfig) -> (SocketAddr, Metrics, Shutdown) {
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    let metrics = Metrics::new().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, metrics.clone());
    let signal = shutdown.signalled();

    tokio::spawn(async move {
        let _ = server.run(listener, signal).await;
    });

    (addr, metrics, shutdown)
}

/// Current value of the request counter for `proto`, if it was ever set.
pub fn request_count(metrics: &Metrics, proto: &str) -> Option<u64> {
    let prefix = format!("{REQUEST_COUNT}{{proto=\"{proto}\"}} ");
    metrics
        .render()
        .lines()
        .find_map(|line| line.strip_prefix(&prefix))
        .map(|value| value.trim().parse().expect("counter value"))
}
