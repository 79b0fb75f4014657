//! Static/catalog recommendation strategy: filter by industry (with the
//! similar-industry fallback), score feasibility and priority against the
//! assessment, and keep the top five.

use std::cmp::Reverse;
use std::sync::Arc;

use super::{Complexity, UseCase, UseCaseCategory, UseCaseRecommendation};
use crate::assessment::catalog::AssessmentCatalog;
use crate::assessment::domain::{AssessmentResult, MaturityLevel};

const BASELINE_SCORE: i32 = 50;
const TOP_RECOMMENDATIONS: usize = 5;

pub struct UseCaseRecommendationEngine {
    catalog: Arc<AssessmentCatalog>,
    use_cases: Arc<Vec<UseCase>>,
}

impl UseCaseRecommendationEngine {
    pub fn new(catalog: Arc<AssessmentCatalog>, use_cases: Arc<Vec<UseCase>>) -> Self {
        Self { catalog, use_cases }
    }

    /// Recommendations for the assessed company, sorted by the plain sum of
    /// priority and feasibility, truncated to the top five. An industry with
    /// no catalog entries falls back to the `other` bucket unioned with its
    /// similar industries; the result may legitimately be empty.
    pub fn recommend(&self, result: &AssessmentResult) -> Vec<UseCaseRecommendation> {
        let candidates = self.candidates(result);

        let mut recommendations: Vec<UseCaseRecommendation> = candidates
            .into_iter()
            .map(|use_case| {
                let feasibility = self.feasibility_score(use_case, result);
                let priority = priority_score(use_case, result);
                UseCaseRecommendation {
                    reasoning: reasoning(use_case, result, feasibility),
                    adapted_steps: adapt_next_steps(use_case, result),
                    use_case: use_case.clone(),
                    feasibility_score: feasibility,
                    priority_score: priority,
                }
            })
            .collect();

        recommendations.sort_by_key(|rec| {
            Reverse(rec.priority_score as u16 + rec.feasibility_score as u16)
        });
        recommendations.truncate(TOP_RECOMMENDATIONS);
        recommendations
    }

    fn candidates(&self, result: &AssessmentResult) -> Vec<&UseCase> {
        let industry = &result.company_info.industry;
        let exact: Vec<&UseCase> = self
            .use_cases
            .iter()
            .filter(|uc| &uc.industry == industry)
            .collect();

        if !exact.is_empty() {
            return exact;
        }

        let mut buckets = self.catalog.similar_industries(industry);
        let other = crate::assessment::domain::IndustryId::new("other");
        if !buckets.contains(&other) {
            buckets.insert(0, other);
        }

        self.use_cases
            .iter()
            .filter(|uc| buckets.contains(&uc.industry))
            .collect()
    }

    /// Feasibility (0-100): baseline 50, adjusted by maturity fit,
    /// complexity vs score, and a budget check against the company-size
    /// threshold.
    fn feasibility_score(&self, use_case: &UseCase, result: &AssessmentResult) -> u8 {
        let mut score = BASELINE_SCORE;

        let user_maturity = result.calculated_level.numeric() as i32;
        let required = use_case.required_maturity_level.numeric() as i32;
        if user_maturity >= required {
            score += 30;
        } else if user_maturity >= required - 1 {
            score += 15;
        } else {
            score -= 20;
        }

        score += match use_case.complexity {
            Complexity::Low => 0,
            Complexity::Medium => {
                if result.score < 40 {
                    -10
                } else {
                    5
                }
            }
            Complexity::High => {
                if result.score < 50 {
                    -25
                } else {
                    10
                }
            }
        };

        let budget = self
            .catalog
            .budget_threshold(result.company_info.company_size);
        if use_case.estimated_cost.max > budget {
            score -= 15;
        }

        score.clamp(0, 100) as u8
    }
}

/// Priority (0-100): baseline 50, plus ROI, time-to-value, quick-win, and
/// category relevance bonuses.
fn priority_score(use_case: &UseCase, result: &AssessmentResult) -> u8 {
    let mut score = BASELINE_SCORE;

    if use_case.estimated_roi.percentage > 200 {
        score += 20;
    } else if use_case.estimated_roi.percentage > 150 {
        score += 10;
    }

    score += time_to_value_bonus(&use_case.time_to_implement);

    if result.score < 40 && use_case.complexity == Complexity::Low {
        score += 15;
    }

    score += category_relevance(use_case.category, result.score);

    score.clamp(0, 100) as u8
}

/// Fixed lookup keyed on the implementation-time label; unlisted labels get
/// no bonus.
fn time_to_value_bonus(time_to_implement: &str) -> i32 {
    match time_to_implement {
        "2-4 weeks" => 20,
        "6-12 Wochen" => 15,
        "2-4 Monate" => 10,
        "3-6 Monate" => 5,
        "6-12 Monate" => -5,
        _ => 0,
    }
}

fn category_relevance(category: UseCaseCategory, score: u32) -> i32 {
    match category {
        UseCaseCategory::Automation => {
            if score < 40 {
                10
            } else {
                5
            }
        }
        UseCaseCategory::Analytics => {
            if score >= 40 {
                10
            } else {
                0
            }
        }
        UseCaseCategory::CustomerExperience => 8,
        UseCaseCategory::Operations => 6,
        UseCaseCategory::Innovation => {
            if score >= 60 {
                10
            } else {
                0
            }
        }
    }
}

/// Canned reasoning sentences selected by threshold checks; no free text.
fn reasoning(use_case: &UseCase, result: &AssessmentResult, feasibility: u8) -> String {
    let mut reasons: Vec<&str> = Vec::new();

    if feasibility >= 70 {
        reasons.push("Sehr gut umsetzbar für Ihr aktuelles Reifelevel");
    } else if feasibility >= 50 {
        reasons.push("Mit etwas Vorbereitung gut umsetzbar");
    } else {
        reasons.push("Benötigt zunächst Aufbau von Grundlagen");
    }

    if use_case.complexity == Complexity::Low && result.score < 40 {
        reasons.push("Idealer Einstieg in AI-Projekte");
    }

    if use_case.estimated_roi.percentage > 200 {
        reasons.push("Sehr hoher ROI erwartet");
    }

    if use_case.category == UseCaseCategory::Automation && result.score >= 50 {
        reasons.push("Passt gut zu Ihrer bereits vorhandenen Automatisierungserfahrung");
    }

    let mut text = reasons.join(". ");
    text.push('.');
    text
}

/// Augment the use case's static steps: foundational steps are prepended
/// for low scores, change-management steps appended for the two lowest
/// levels, and consulting hints appended for the two smallest size buckets.
/// Order is prepend, base, append.
fn adapt_next_steps(use_case: &UseCase, result: &AssessmentResult) -> Vec<String> {
    let mut steps = use_case.next_steps.clone();

    if result.score < 30 {
        steps.insert(0, "Grundlagen-Workshop zu AI/ML durchführen".to_string());
        steps.insert(0, "AI-Strategie und Governance definieren".to_string());
    }

    if matches!(
        result.calculated_level,
        MaturityLevel::Resister | MaturityLevel::Explorer
    ) {
        steps.push("Change Management für AI-Einführung planen".to_string());
        steps.push("Team-Training und Weiterbildung organisieren".to_string());
    }

    if result.company_info.company_size.is_small_business() {
        steps.push("Externe AI-Beratung in Betracht ziehen".to_string());
        steps.push("SaaS-Lösungen bevorzugt evaluieren".to_string());
    }

    steps
}
