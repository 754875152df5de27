// src/routes/health.rs
//! Liveness endpoint for the hive monitor API.
//!
//! `GET /health` lets container orchestrators and CI check that the service
//! is up and answering HTTP requests. The gateway (`mod.rs`) merges this
//! subrouter into the top-level router.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Handle `GET /health`. Does not touch the preference store.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Subrouter with the `/health` route, generic over the gateway state.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[tokio::test]
    async fn test_health_reports_ok() {
        // ---
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
    }
}
