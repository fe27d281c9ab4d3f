//! Custom error page backend.
//!
//! # Architecture Overview
//!
//! ```text
//!     ingress proxy ── X-Code / X-Format ──▶ ┌──────────────────────────────┐
//!                                            │ http::server (axum router)    │
//!                                            │   /healthz  /metrics  /*      │
//!                                            └──────────────┬───────────────┘
//!                                                           ▼
//!                                            ┌──────────────────────────────┐
//!                                            │ pages: format, code, resolver │──▶ <root>/404.html
//!                                            └──────────────┬───────────────┘    <root>/4xx.html
//!                                                           ▼
//!     client ◀───────────── streamed page ── http::response + metrics
//! ```

use std::path::PathBuf;

use clap::Parser;

use custom_error_pages::config::load_config;
use custom_error_pages::lifecycle::startup;
use custom_error_pages::observability::init_logging;

/// Serve static error pages selected by X-Code and X-Format headers.
#[derive(Debug, Parser)]
#[command(name = "custom-error-pages", version, about)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(&config.observability);

    tracing::info!("custom-error-pages v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        root = %config.pages.root,
        debug_headers = config.pages.debug_headers,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
