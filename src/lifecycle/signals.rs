//! OS signal handling.
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - SIGINT and SIGTERM both mean graceful shutdown

use crate::lifecycle::Shutdown;

/// Wait for Ctrl+C or, on Unix, SIGTERM.
pub async fn wait_for_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result?,
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await?;

    Ok(())
}

/// Trigger `shutdown` when the process is asked to stop.
pub fn spawn_signal_listener(shutdown: Shutdown) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(err) => tracing::error!(error = %err, "Failed to listen for signals, shutting down"),
        }
        shutdown.trigger();
    });
}
