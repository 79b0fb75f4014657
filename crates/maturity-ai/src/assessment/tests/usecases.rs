use std::sync::Arc;

use super::common::*;
use crate::assessment::domain::{CompanySize, IndustryId, MaturityLevel};
use crate::assessment::usecases::recommend::UseCaseRecommendationEngine;
use crate::assessment::usecases::{reference_use_cases, UseCase};

fn engine_with(use_cases: Vec<UseCase>) -> UseCaseRecommendationEngine {
    UseCaseRecommendationEngine::new(catalog(), Arc::new(use_cases))
}

fn reference_case(id: &str) -> UseCase {
    reference_use_cases()
        .into_iter()
        .find(|uc| uc.id == id)
        .unwrap_or_else(|| panic!("catalog contains {id}"))
}

#[test]
fn accessible_low_complexity_case_scores_high() {
    // Player (3) vs beginner requirement, low complexity, cost within the
    // small-company budget: 50 + 30 = 80 feasibility. Priority: 50 + 10
    // (ROI 200) + 15 (6-12 Wochen) + 15 (quick win) + 8 (CX) = 98.
    let engine = engine_with(vec![reference_case("banking-chatbot")]);
    let result = scored_result(
        35,
        MaturityLevel::Player,
        "banking-finance",
        CompanySize::Small,
    );

    let recommendations = engine.recommend(&result);
    assert_eq!(recommendations.len(), 1);
    let rec = &recommendations[0];
    assert_eq!(rec.feasibility_score, 80);
    assert_eq!(rec.priority_score, 98);
    assert!(rec.reasoning.contains("Sehr gut umsetzbar"));
    assert!(rec.reasoning.contains("Idealer Einstieg"));
}

#[test]
fn demanding_case_bottoms_out_for_immature_company() {
    // Resister (1) vs advanced (3): -20. High complexity below score 50:
    // -25. Cost far beyond the micro budget: -15. Clamped at zero.
    let engine = engine_with(vec![reference_case("healthcare-triage-assistant")]);
    let result = scored_result(20, MaturityLevel::Resister, "healthcare", CompanySize::Micro);

    let recommendations = engine.recommend(&result);
    assert_eq!(recommendations.len(), 1);
    let rec = &recommendations[0];
    assert_eq!(rec.feasibility_score, 0);
    assert!(rec.reasoning.contains("Aufbau von Grundlagen"));
}

#[test]
fn recommendations_are_capped_at_five() {
    let use_cases: Vec<UseCase> = (1..=7)
        .map(|index| {
            let mut case = generated_use_case(&format!("case-{index}"));
            case.industry = IndustryId::new("banking-finance");
            case
        })
        .collect();
    let engine = engine_with(use_cases);
    let result = scored_result(
        40,
        MaturityLevel::Player,
        "banking-finance",
        CompanySize::Medium,
    );

    assert_eq!(engine.recommend(&result).len(), 5);
}

#[test]
fn recommendations_sort_by_combined_score() {
    let engine = engine_with(reference_use_cases());
    let result = scored_result(
        35,
        MaturityLevel::Player,
        "banking-finance",
        CompanySize::Small,
    );

    let recommendations = engine.recommend(&result);
    let sums: Vec<u16> = recommendations
        .iter()
        .map(|rec| rec.priority_score as u16 + rec.feasibility_score as u16)
        .collect();
    let mut sorted = sums.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(sums, sorted);
}

#[test]
fn industry_without_use_cases_falls_back_to_related_buckets() {
    // `chemical-pharma` has no catalog entries; the engine widens to similar
    // industries plus the generic bucket instead of returning nothing.
    let engine = engine_with(reference_use_cases());
    let result = scored_result(
        35,
        MaturityLevel::Player,
        "chemical-pharma",
        CompanySize::Medium,
    );

    let recommendations = engine.recommend(&result);
    assert!(!recommendations.is_empty());
    assert!(recommendations
        .iter()
        .all(|rec| rec.use_case.industry != IndustryId::new("chemical-pharma")));
}

#[test]
fn dedicated_industries_resolve_their_own_catalog_entries() {
    let cases = reference_use_cases();
    for industry in [
        "banking-finance",
        "consulting",
        "education",
        "energy",
        "healthcare",
        "insurance",
        "it-software",
        "logistics",
        "media",
        "production",
        "public",
        "retail",
        "tourism",
        "other",
    ] {
        assert!(
            cases
                .iter()
                .any(|uc| uc.industry == IndustryId::new(industry)),
            "no use case targets {industry}"
        );
    }
}

#[test]
fn adapted_steps_wrap_the_base_steps_for_beginners() {
    let engine = engine_with(vec![reference_case("other-process-automation")]);
    let result = scored_result(16, MaturityLevel::Explorer, "other", CompanySize::Micro);

    let recommendations = engine.recommend(&result);
    let steps = &recommendations[0].adapted_steps;

    // Foundational steps first, the catalog steps in the middle, change
    // management and small-company advice appended.
    assert!(steps[0].contains("AI-Strategie und Governance"));
    assert!(steps[1].contains("Grundlagen-Workshop"));
    assert!(steps.contains(&"Prozessanalyse".to_string()));
    let tail = &steps[steps.len() - 4..];
    assert!(tail[0].contains("Change Management"));
    assert!(tail[1].contains("Team-Training"));
    assert!(tail[2].contains("Externe AI-Beratung"));
    assert!(tail[3].contains("SaaS-Lösungen"));
}

#[test]
fn mature_large_company_keeps_catalog_steps_untouched() {
    let engine = engine_with(vec![reference_case("production-predictive-maintenance")]);
    let result = scored_result(
        55,
        MaturityLevel::Transformer,
        "production",
        CompanySize::Large,
    );

    let recommendations = engine.recommend(&result);
    let base = reference_case("production-predictive-maintenance").next_steps;
    assert_eq!(recommendations[0].adapted_steps, base);
}
