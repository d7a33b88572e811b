//! Graceful shutdown signal handling.

use std::future::pending;
use std::time::Duration;

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix;
use tokio::sync::oneshot;

use crate::TRACING_TARGET_SERVER_SHUTDOWN;

/// Waits for a shutdown signal (SIGTERM or SIGINT/Ctrl+C).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                error = %e,
                "Failed to install Ctrl+C handler"
            );
            pending::<()>().await;
        } else {
            tracing::info!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                "Received Ctrl+C signal, initiating graceful shutdown"
            );
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    "Received SIGTERM signal, initiating graceful shutdown"
                );
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    error = %e,
                    "Failed to install SIGTERM handler"
                );
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// Resolves `shutdown_timeout` after the shutdown signal fired.
///
/// Never resolves if the signal was not sent.
pub async fn shutdown_deadline(signal: oneshot::Receiver<()>, shutdown_timeout: Duration) {
    if signal.await.is_err() {
        pending::<()>().await;
    }

    tracing::info!(
        target: TRACING_TARGET_SERVER_SHUTDOWN,
        timeout_secs = shutdown_timeout.as_secs(),
        "Waiting for in-flight requests"
    );

    tokio::time::sleep(shutdown_timeout).await;

    tracing::warn!(
        target: TRACING_TARGET_SERVER_SHUTDOWN,
        timeout_secs = shutdown_timeout.as_secs(),
        "Shutdown timeout elapsed, dropping remaining connections"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deadline_elapses_after_signal() {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(());

        let elapsed = tokio::time::timeout(
            Duration::from_secs(5),
            shutdown_deadline(rx, Duration::from_millis(10)),
        )
        .await;

        assert!(elapsed.is_ok());
    }

    #[tokio::test]
    async fn deadline_waits_without_signal() {
        let (tx, rx) = oneshot::channel::<()>();
        drop(tx);

        let elapsed = tokio::time::timeout(
            Duration::from_millis(50),
            shutdown_deadline(rx, Duration::from_millis(1)),
        )
        .await;

        assert!(elapsed.is_err());
    }
}
