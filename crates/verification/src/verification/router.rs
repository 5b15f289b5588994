use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::checks::{BackgroundChecker, FaceMatcher};
use super::domain::{VerificationId, VerificationRequest};
use super::repository::{AlertPublisher, RepositoryError, VerificationRepository};
use super::service::{ReviewDecision, VerificationService, VerificationServiceError};

const PENDING_LIMIT: usize = 50;

/// Router builder exposing HTTP endpoints for verification and admin review.
pub fn verification_router<F, B, R, A>(service: Arc<VerificationService<F, B, R, A>>) -> Router
where
    F: FaceMatcher + 'static,
    B: BackgroundChecker + 'static,
    R: VerificationRepository + 'static,
    A: AlertPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/professionals/verifications",
            post(submit_handler::<F, B, R, A>).get(pending_handler::<F, B, R, A>),
        )
        .route(
            "/api/v1/professionals/verifications/:verification_id",
            get(status_handler::<F, B, R, A>),
        )
        .route(
            "/api/v1/professionals/verifications/:verification_id/review",
            post(review_handler::<F, B, R, A>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<F, B, R, A>(
    State(service): State<Arc<VerificationService<F, B, R, A>>>,
    axum::Json(request): axum::Json<VerificationRequest>,
) -> Response
where
    F: FaceMatcher + 'static,
    B: BackgroundChecker + 'static,
    R: VerificationRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.verify(request).await {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(VerificationServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "verification already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<F, B, R, A>(
    State(service): State<Arc<VerificationService<F, B, R, A>>>,
    Path(verification_id): Path<String>,
) -> Response
where
    F: FaceMatcher + 'static,
    B: BackgroundChecker + 'static,
    R: VerificationRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = VerificationId(verification_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(VerificationServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "verification not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn pending_handler<F, B, R, A>(
    State(service): State<Arc<VerificationService<F, B, R, A>>>,
) -> Response
where
    F: FaceMatcher + 'static,
    B: BackgroundChecker + 'static,
    R: VerificationRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.pending(PENDING_LIMIT) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.status_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewRequest {
    pub(crate) decision: String,
    #[serde(default)]
    pub(crate) note: Option<String>,
}

pub(crate) async fn review_handler<F, B, R, A>(
    State(service): State<Arc<VerificationService<F, B, R, A>>>,
    Path(verification_id): Path<String>,
    axum::Json(request): axum::Json<ReviewRequest>,
) -> Response
where
    F: FaceMatcher + 'static,
    B: BackgroundChecker + 'static,
    R: VerificationRepository + 'static,
    A: AlertPublisher + 'static,
{
    let decision = match request.decision.as_str() {
        "approve" => ReviewDecision::Approve,
        "reject" => ReviewDecision::Reject,
        other => {
            let payload = json!({
                "error": format!("unknown review decision '{other}'"),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let id = VerificationId(verification_id);
    match service.review(&id, decision, request.note) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(VerificationServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "verification not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
