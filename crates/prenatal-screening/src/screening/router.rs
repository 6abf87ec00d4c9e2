use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerSet, RiskAdvice, ScreeningSubmission};
use super::evaluation::RiskAssessment;
use super::repository::{RepositoryError, ScreeningId, ScreeningRepository};
use super::service::{ScreeningService, ScreeningServiceError};

/// Router builder exposing intake, lookup, and catalog endpoints.
pub fn screening_router<R>(service: Arc<ScreeningService<R>>) -> Router
where
    R: ScreeningRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/screenings",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route("/api/v1/screenings/evaluate", post(evaluate_handler::<R>))
        .route("/api/v1/screenings/:screening_id", get(record_handler::<R>))
        .route("/api/v1/rules", get(rules_handler::<R>))
        .route("/api/v1/questions", get(questions_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluationResponse {
    #[serde(flatten)]
    pub(crate) assessment: RiskAssessment,
    pub(crate) advice: RiskAdvice,
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Json(submission): Json<ScreeningSubmission>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, Json(record.status_view())).into_response(),
        Err(ScreeningServiceError::Intake(violation)) => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            violation.to_string(),
        ),
        Err(ScreeningServiceError::Repository(RepositoryError::Conflict)) => {
            error_response(StatusCode::CONFLICT, "screening already exists".to_string())
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn evaluate_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Json(answers): Json<AnswerSet>,
) -> Json<EvaluationResponse>
where
    R: ScreeningRepository + 'static,
{
    let assessment = service.assess(&answers);
    let advice = assessment.level.advice();
    Json(EvaluationResponse { assessment, advice })
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(screening_id): Path<String>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let id = ScreeningId(screening_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => error_response(
            StatusCode::NOT_FOUND,
            format!("screening {} not found", id.0),
        ),
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ScreeningService<R>>>) -> Response
where
    R: ScreeningRepository + 'static,
{
    match service.list() {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn rules_handler<R>(State(service): State<Arc<ScreeningService<R>>>) -> Response
where
    R: ScreeningRepository + 'static,
{
    (StatusCode::OK, Json(service.evaluator().table())).into_response()
}

pub(crate) async fn questions_handler() -> Response {
    let catalog = QuestionCatalog::standard();
    (StatusCode::OK, Json(catalog.questions())).into_response()
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
