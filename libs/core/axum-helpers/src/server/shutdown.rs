use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};

/// Broadcasts a single shutdown notification to every subscriber.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: broadcast::Sender<()>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            shutdown_initiated: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_initiated.load(Ordering::Relaxed)
    }

    /// Only the first call notifies subscribers.
    pub fn shutdown(&self) {
        if self
            .shutdown_initiated
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            info!("initiating graceful shutdown");
            let _ = self.tx.send(());
        }
    }

    /// Resolves on SIGINT or SIGTERM, then calls [`Self::shutdown`].
    pub async fn wait_for_signal(&self) {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                error!(error = %e, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    error!(error = %e, "failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        let mut notified = self.subscribe();
        if self.is_shutting_down() {
            return;
        }

        tokio::select! {
            _ = ctrl_c => info!("received SIGINT"),
            _ = terminate => info!("received SIGTERM"),
            _ = notified.recv() => info!("shutdown requested"),
        }

        self.shutdown();
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn shutdown_notifies_once() {
        let coordinator = ShutdownCoordinator::new();
        let mut rx = coordinator.subscribe();

        assert!(!coordinator.is_shutting_down());
        coordinator.shutdown();
        coordinator.shutdown();

        assert!(coordinator.is_shutting_down());
        assert!(rx.recv().await.is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn programmatic_shutdown_releases_signal_waiters() {
        let coordinator = ShutdownCoordinator::new();
        let waiter = coordinator.clone();
        let handle = tokio::spawn(async move { waiter.wait_for_signal().await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        coordinator.shutdown();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should finish")
            .unwrap();
    }
}
