use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use formsink::submissions::{submission_router, SubmissionService, SubmissionStore};
use serde_json::json;
use std::io::ErrorKind;
use std::sync::Arc;

pub(crate) fn with_operational_routes<S>(service: Arc<SubmissionService<S>>) -> axum::Router
where
    S: SubmissionStore + 'static,
{
    submission_router(service)
        .route("/api", axum::routing::get(api_data_endpoint))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

/// Fixed payload; does not verify store reachability. The "connected" field
/// mirrors the historical response shape rather than a live probe.
pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "database": "connected" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Passthrough for the configured JSON data file.
pub(crate) async fn api_data_endpoint(Extension(state): Extension<AppState>) -> Response {
    match tokio::fs::read_to_string(state.data_file.as_ref()).await {
        Ok(raw) => match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => (StatusCode::OK, Json(value)).into_response(),
            Err(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Invalid JSON format in data file" })),
            )
                .into_response(),
        },
        Err(err) if err.kind() == ErrorKind::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Data file not found" })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}
