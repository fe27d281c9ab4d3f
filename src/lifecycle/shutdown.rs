//! Shutdown coordination.

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Coordinator for graceful shutdown.
///
/// Cloning shares the same underlying signal; triggering any clone stops
/// every server waiting on it.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    token: CancellationToken,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Future that resolves once shutdown has been triggered.
    pub fn signalled(&self) -> impl Future<Output = ()> + Send + 'static {
        self.token.clone().cancelled_owned()
    }

    /// Trigger the shutdown signal. Idempotent.
    pub fn trigger(&self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_wakes_waiters() {
        let shutdown = Shutdown::new();
        let waiter = tokio::spawn(shutdown.signalled());

        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());
        shutdown.clone().trigger();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();

        // Waiters created after the trigger resolve at once.
        tokio::time::timeout(Duration::from_secs(1), shutdown.signalled())
            .await
            .expect("late waiter should resolve");
    }
}
