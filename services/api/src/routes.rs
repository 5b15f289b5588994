use crate::infra::AppState;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use bokaboka_verification::verification::{
    verification_router, AlertPublisher, BackgroundChecker, FaceMatcher, VerificationRepository,
    VerificationService,
};

pub(crate) fn with_verification_routes<F, B, R, A>(
    service: Arc<VerificationService<F, B, R, A>>,
) -> axum::Router
where
    F: FaceMatcher + 'static,
    B: BackgroundChecker + 'static,
    R: VerificationRepository + 'static,
    A: AlertPublisher + 'static,
{
    verification_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(Ordering::Acquire) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "starting" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> String {
    state.metrics.render()
}
