use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::domain::MaturityLevel;
use crate::assessment::router::assessment_router;

fn json_request(uri: &str, payload: &serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("payload serializes"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn questions_route_lists_the_questionnaire() {
    let (service, _) = build_service(None);
    let router = assessment_router(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/assessment/questions")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .get("questions")
            .and_then(serde_json::Value::as_array)
            .map(Vec::len),
        Some(15)
    );
    assert_eq!(
        payload.get("maxScore").and_then(serde_json::Value::as_u64),
        Some(5)
    );
}

#[tokio::test]
async fn levels_route_lists_all_five_levels() {
    let (service, _) = build_service(None);
    let router = assessment_router(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/assessment/levels")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn submit_route_scores_valid_payloads() {
    let (service, repository) = build_service(None);
    let router = assessment_router(service);

    let payload =
        serde_json::to_value(submission(45, MaturityLevel::Explorer)).expect("serializes");
    let response = router
        .oneshot(json_request("/api/v1/assessment/submit", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("calculatedLevel")
            .and_then(serde_json::Value::as_str),
        Some("Digital AI Player")
    );
    assert_eq!(body.get("delta").and_then(serde_json::Value::as_str), Some("+1"));
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn submit_route_rejects_invalid_payloads() {
    let (service, _) = build_service(None);
    let router = assessment_router(service);

    let mut submission = submission(45, MaturityLevel::Explorer);
    submission.answers.pop();
    let payload = serde_json::to_value(submission).expect("serializes");

    let response = router
        .oneshot(json_request("/api/v1/assessment/submit", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("incomplete"));
}

#[tokio::test]
async fn products_route_returns_matching_offerings() {
    let (service, _) = build_service(None);
    let router = assessment_router(service);

    let result = scored_result(
        20,
        MaturityLevel::Resister,
        "banking-finance",
        crate::assessment::domain::CompanySize::Small,
    );
    let payload = json!({ "result": result });

    let response = router
        .oneshot(json_request("/api/v1/recommendations/products", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(!body.as_array().expect("array body").is_empty());
}

#[tokio::test]
async fn use_cases_route_reports_degradation() {
    let (service, _) = build_service(None);
    let router = assessment_router(service);

    let result = scored_result(
        35,
        MaturityLevel::Player,
        "retail",
        crate::assessment::domain::CompanySize::Medium,
    );
    let payload = json!({ "result": result, "strategy": "dynamic" });

    let response = router
        .oneshot(json_request("/api/v1/recommendations/use-cases", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("degraded"), Some(&json!(true)));
    assert_eq!(
        body.get("recommendations")
            .and_then(serde_json::Value::as_array)
            .map(Vec::len),
        Some(1)
    );
}

#[tokio::test]
async fn composed_route_bundles_the_full_package() {
    let (service, _) = build_service(None);
    let router = assessment_router(service);

    let result = scored_result(
        45,
        MaturityLevel::Explorer,
        "banking-finance",
        crate::assessment::domain::CompanySize::Medium,
    );
    let payload = json!({ "result": result });

    let response = router
        .oneshot(json_request("/api/v1/recommendations/composed", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(body.get("narrative").is_some());
    assert!(body.get("products").is_some());
    assert_eq!(body.get("degraded"), Some(&json!(true)));
}
