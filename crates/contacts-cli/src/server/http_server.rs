//! HTTP server startup.

use std::future::IntoFuture;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use super::lifecycle::{log_failure, serve_with_shutdown};
use super::shutdown::{shutdown_deadline, shutdown_signal};
use super::{Result, ServerError};
use crate::TRACING_TARGET_SERVER_STARTUP;
use crate::config::ServerConfig;

/// Binds `HOST:PORT` and serves `app` until a shutdown signal arrives.
///
/// In-flight requests get up to the configured shutdown timeout to finish.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the address cannot be
/// bound, or the server fails while running.
pub async fn serve(app: Router, server_config: ServerConfig) -> Result<()> {
    if let Err(err) = server_config.validate() {
        let err = ServerError::invalid_config(&err);
        log_failure(&err);
        return Err(err);
    }

    let server_addr = server_config.server_addr();
    let listener = match TcpListener::bind(server_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            let err = ServerError::bind_error(server_addr, err);
            log_failure(&err);
            return Err(err);
        }
    };

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %server_addr,
        "Successfully bound to address"
    );

    let shutdown_timeout = server_config.shutdown_timeout();
    serve_with_shutdown(&server_config, || async move {
        let (signal_tx, signal_rx) = oneshot::channel();
        let graceful = async move {
            shutdown_signal().await;
            let _ = signal_tx.send(());
        };

        let server = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(graceful)
        .into_future();

        tokio::select! {
            result = server => result,
            () = shutdown_deadline(signal_rx, shutdown_timeout) => Ok(()),
        }
    })
    .await
}
