use crate::infra::{AppState, InMemoryAssessmentRepository, InMemoryClubDirectory};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use clubcompass::assessment::{
    assessment_router, AssessmentService, ClubDirectory, ClubSummary,
};
use clubcompass::error::AppError;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct ClubListResponse {
    pub(crate) clubs: Vec<ClubSummary>,
    pub(crate) total: usize,
}

pub(crate) fn with_assessment_routes(
    service: Arc<AssessmentService<InMemoryAssessmentRepository, InMemoryClubDirectory>>,
) -> axum::Router {
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/clubs", axum::routing::get(list_clubs_endpoint))
        .route("/api/v1/clubs/:slug", axum::routing::get(club_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
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

pub(crate) async fn list_clubs_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<ClubListResponse>, AppError> {
    let clubs = state.directory.active_clubs()?;
    let total = clubs.len();
    Ok(Json(ClubListResponse { clubs, total }))
}

pub(crate) async fn club_endpoint(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Result<axum::response::Response, AppError> {
    let response = match state.directory.find_by_slug(slug.trim())? {
        Some(club) => (StatusCode::OK, Json(club)).into_response(),
        None => {
            let payload = json!({ "error": "club not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    };
    Ok(response)
}
