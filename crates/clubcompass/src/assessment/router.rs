use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentId, QuizResponses, UserId};
use super::repository::{
    AssessmentHistoryView, AssessmentRepository, ClubDirectory, RepositoryError,
};
use super::service::{AssessmentService, AssessmentServiceError, DEFAULT_HISTORY_LIMIT};

/// Submission payload: one completed quiz plus an optional owning user.
#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub responses: QuizResponses,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Builds the HTTP surface for submitting assessments and reading them back.
pub fn assessment_router<R, D>(service: Arc<AssessmentService<R, D>>) -> Router
where
    R: AssessmentRepository + 'static,
    D: ClubDirectory + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<R, D>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(result_handler::<R, D>),
        )
        .route(
            "/api/v1/assessments/user/:user_id",
            get(history_handler::<R, D>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, D>(
    State(service): State<Arc<AssessmentService<R, D>>>,
    axum::Json(request): axum::Json<SubmitAssessmentRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
    D: ClubDirectory + 'static,
{
    match service.submit(request.responses, request.user_id) {
        Ok(result) => (StatusCode::CREATED, axum::Json(result)).into_response(),
        Err(AssessmentServiceError::Directory(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "assessment already exists",
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

pub(crate) async fn result_handler<R, D>(
    State(service): State<Arc<AssessmentService<R, D>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    D: ClubDirectory + 'static,
{
    // A malformed identifier cannot name a stored record.
    let Some(id) = AssessmentId::parse(&assessment_id) else {
        return assessment_not_found();
    };

    match service.result(&id) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            assessment_not_found()
        }
        Err(AssessmentServiceError::Directory(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn history_handler<R, D>(
    State(service): State<Arc<AssessmentService<R, D>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    D: ClubDirectory + 'static,
{
    // A malformed owner id matches nothing, so the listing is empty.
    let Some(user) = UserId::parse(&user_id) else {
        let empty: Vec<AssessmentHistoryView> = Vec::new();
        return (StatusCode::OK, axum::Json(empty)).into_response();
    };

    match service.history(&user, DEFAULT_HISTORY_LIMIT) {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn assessment_not_found() -> Response {
    let payload = json!({
        "error": "assessment not found",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
