//! Liveness check handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;

use crate::extract::Json;
use crate::handler::response::Health;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "contacts_server::handler::monitors";

/// Reports that the process is up. The database is not consulted.
async fn health_status() -> (StatusCode, Json<Health>) {
    tracing::trace!(target: TRACING_TARGET, "Health status requested");
    (StatusCode::OK, Json(Health::default()))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health check")
        .description("Returns a static liveness payload with the current time.")
        .response::<200, Json<Health>>()
}

/// Returns a [`Router`] with the health route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Monitors"))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::handler::test::create_unreachable_test_server;

    #[tokio::test]
    async fn health_does_not_need_database() -> anyhow::Result<()> {
        let server = create_unreachable_test_server()?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "API is healthy");
        assert_eq!(body["version"], "1.0.0");

        let timestamp = body["timestamp"].as_str().unwrap_or_default();
        assert!(timestamp.parse::<jiff::Timestamp>().is_ok());
        Ok(())
    }
}
