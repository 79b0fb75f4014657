use super::common::*;
use crate::assessment::domain::{CompanySize, MaturityLevel};
use crate::assessment::generation::GenerationError;
use crate::assessment::usecases::dynamic::{parse_use_cases, DynamicUseCaseEngine};

fn engine() -> DynamicUseCaseEngine {
    DynamicUseCaseEngine::new(catalog())
}

#[test]
fn parse_accepts_plain_json_arrays() {
    let use_cases = parse_use_cases(&generated_use_cases_json()).expect("valid payload");
    assert_eq!(use_cases.len(), 5);
    assert_eq!(use_cases[0].id, "generated-1");
}

#[test]
fn parse_strips_markdown_fences() {
    let fenced = format!("```json\n{}\n```", generated_use_cases_json());
    let use_cases = parse_use_cases(&fenced).expect("fenced payload");
    assert_eq!(use_cases.len(), 5);

    let bare_fence = format!("```\n{}\n```", generated_use_cases_json());
    assert!(parse_use_cases(&bare_fence).is_ok());
}

#[test]
fn parse_rejects_wrong_cardinality() {
    let single = serde_json::to_string(&vec![generated_use_case("only-one")])
        .expect("fixture serializes");
    let error = parse_use_cases(&single).expect_err("one use case is not enough");
    assert!(matches!(error, GenerationError::Malformed(_)));
}

#[test]
fn parse_rejects_non_json_prose() {
    let error =
        parse_use_cases("Hier sind Ihre Use Cases: ...").expect_err("prose must be rejected");
    assert!(matches!(error, GenerationError::Malformed(_)));
}

#[tokio::test]
async fn missing_generator_serves_the_generic_fallback() {
    let result = scored_result(35, MaturityLevel::Player, "retail", CompanySize::Small);
    let outcome = engine().recommend(None, &result).await;

    assert!(outcome.degraded);
    assert_eq!(outcome.recommendations.len(), 1);
    let rec = &outcome.recommendations[0];
    assert_eq!(rec.use_case.id, "fallback-automation");
    assert_eq!(rec.feasibility_score, 80);
    assert_eq!(rec.priority_score, 75);
    assert_eq!(rec.use_case.industry, result.company_info.industry);
}

#[tokio::test]
async fn failing_generator_serves_the_generic_fallback() {
    let result = scored_result(35, MaturityLevel::Player, "retail", CompanySize::Small);
    let outcome = engine().recommend(Some(&FailingGenerator), &result).await;

    assert!(outcome.degraded);
    assert_eq!(outcome.recommendations.len(), 1);
    assert_eq!(outcome.recommendations[0].use_case.id, "fallback-automation");
}

#[tokio::test]
async fn malformed_generator_output_serves_the_generic_fallback() {
    let generator = StubGenerator {
        response: "not json".to_string(),
    };
    let result = scored_result(35, MaturityLevel::Player, "retail", CompanySize::Small);
    let outcome = engine().recommend(Some(&generator), &result).await;

    assert!(outcome.degraded);
    assert_eq!(outcome.recommendations.len(), 1);
}

#[tokio::test]
async fn generated_use_cases_get_positional_priorities() {
    let generator = StubGenerator {
        response: generated_use_cases_json(),
    };
    let result = scored_result(
        35,
        MaturityLevel::Player,
        "banking-finance",
        CompanySize::Small,
    );
    let outcome = engine().recommend(Some(&generator), &result).await;

    assert!(!outcome.degraded);
    let priorities: Vec<u8> = outcome
        .recommendations
        .iter()
        .map(|rec| rec.priority_score)
        .collect();
    assert_eq!(priorities, vec![90, 80, 70, 60, 50]);
}

#[tokio::test]
async fn generated_feasibility_uses_the_simplified_model() {
    // Low complexity at score 35 (< 40): 60 + 20. Cost 40k within the
    // small-company bound: + 10. Total 90.
    let generator = StubGenerator {
        response: generated_use_cases_json(),
    };
    let result = scored_result(
        35,
        MaturityLevel::Player,
        "banking-finance",
        CompanySize::Small,
    );
    let outcome = engine().recommend(Some(&generator), &result).await;

    assert!(outcome
        .recommendations
        .iter()
        .all(|rec| rec.feasibility_score == 90));
}
