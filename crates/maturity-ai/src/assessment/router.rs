use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::AssessmentResult;
use super::repository::AssessmentRepository;
use super::service::{AssessmentService, AssessmentSubmission, UseCaseStrategy};

/// Router builder exposing the assessment and recommendation endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<R>))
        .route("/api/v1/assessment/levels", get(levels_handler::<R>))
        .route("/api/v1/assessment/submit", post(submit_handler::<R>))
        .route(
            "/api/v1/recommendations/products",
            post(products_handler::<R>),
        )
        .route(
            "/api/v1/recommendations/use-cases",
            post(use_cases_handler::<R>),
        )
        .route(
            "/api/v1/recommendations/composed",
            post(composed_handler::<R>),
        )
        .with_state(service)
}

/// Recommendation request: a previously computed result plus the optional
/// use-case strategy (defaults to the curated catalog).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub result: AssessmentResult,
    #[serde(default)]
    pub strategy: UseCaseStrategy,
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let payload = json!({
        "questions": service.catalog().questions(),
        "minScore": service.catalog().min_answer_score(),
        "maxScore": service.catalog().max_answer_score(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn levels_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: AssessmentRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.catalog().levels())).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.submit(submission) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn products_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let products = service.product_recommendations(&request.result);
    (StatusCode::OK, axum::Json(products)).into_response()
}

pub(crate) async fn use_cases_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let (recommendations, degraded) = service
        .use_case_recommendations(request.strategy, &request.result)
        .await;
    let payload = json!({
        "recommendations": recommendations,
        "degraded": degraded,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn composed_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let composed = service.compose(&request.result).await;
    (StatusCode::OK, axum::Json(composed)).into_response()
}
