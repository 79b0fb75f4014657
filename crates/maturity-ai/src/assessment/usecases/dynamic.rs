//! Dynamic recommendation strategy: the collaborator authors the use cases
//! themselves from a deterministic company-profile prompt. Any failure,
//! timeout, or shape deviation falls through to a fixed generic use case so
//! this path never yields zero recommendations.

use std::sync::Arc;

use tracing::warn;

use super::{Complexity, CostRange, RequiredMaturity, RoiEstimate, UseCase, UseCaseCategory};
use super::UseCaseRecommendation;
use crate::assessment::catalog::AssessmentCatalog;
use crate::assessment::domain::{AssessmentResult, CompanySize};
use crate::assessment::generation::{GenerationError, GenerationRequest, TextGenerator};

const EXPECTED_USE_CASES: usize = 5;
const FALLBACK_FEASIBILITY: u8 = 80;
const FALLBACK_PRIORITY: u8 = 75;

/// Outcome of the dynamic strategy. `degraded` is set when the fallback
/// content was served instead of generated use cases.
#[derive(Debug, Clone)]
pub struct DynamicRecommendations {
    pub recommendations: Vec<UseCaseRecommendation>,
    pub degraded: bool,
}

pub struct DynamicUseCaseEngine {
    catalog: Arc<AssessmentCatalog>,
}

impl DynamicUseCaseEngine {
    pub fn new(catalog: Arc<AssessmentCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn recommend(
        &self,
        generator: Option<&dyn TextGenerator>,
        result: &AssessmentResult,
    ) -> DynamicRecommendations {
        let Some(generator) = generator else {
            return self.fallback(result);
        };

        let request = GenerationRequest {
            system: system_instructions().to_string(),
            prompt: self.build_prompt(result),
            max_tokens: 2500,
            temperature: 0.1,
        };

        match generator.generate(&request).await {
            Ok(raw) => match parse_use_cases(&raw) {
                Ok(use_cases) => DynamicRecommendations {
                    recommendations: self.score_generated(use_cases, result),
                    degraded: false,
                },
                Err(err) => {
                    warn!(%err, "generated use cases failed validation, serving fallback");
                    self.fallback(result)
                }
            },
            Err(err) => {
                warn!(%err, "use case generation failed, serving fallback");
                self.fallback(result)
            }
        }
    }

    /// Deterministic prompt over company info, computed level, and score.
    fn build_prompt(&self, result: &AssessmentResult) -> String {
        let industry = self
            .catalog
            .industry_label(&result.company_info.industry)
            .unwrap_or("Allgemein");
        let size = result.company_info.company_size;
        let (budget, resources) = size_profile(size);

        format!(
            "UNTERNEHMENSPROFIL:\n\
             - Branche: {industry}\n\
             - Unternehmensgröße: {size}\n\
             - AI-Maturity Level: {level}\n\
             - Assessment Score: {score}/{max} Punkte\n\
             - Geschätztes Budget: {budget} CHF\n\
             - Ressourcen: {resources}\n\n\
             AUFGABE:\n\
             Generiere genau {count} AI Use Cases für dieses Unternehmen, sortiert nach \
             Priorität (höchste zuerst). Antworte als JSON Array von Use-Case-Objekten mit den \
             Feldern id, title, description, industry (\"{industry_id}\"), category \
             (automation|analytics|customer-experience|operations|innovation), complexity \
             (low|medium|high), timeToImplement, requiredMaturityLevel \
             (beginner|intermediate|advanced|expert), estimatedCost {{min, max, currency}}, \
             estimatedROI {{timeframe, percentage, description}}, prerequisites, benefits, \
             risks, technologies, nextSteps.\n\n\
             GUIDELINES:\n\
             - Kosten realistisch für {size}\n\
             - ROI zwischen 120-350% je nach Komplexität\n\
             - Complexity angepasst an Score {score}/{max}\n\
             - Alle Texte auf Deutsch, konkrete umsetzbare Use Cases\n\
             - Quick Wins für niedrige Maturity Levels priorisieren\n",
            level = result.calculated_level,
            score = result.score,
            max = self.catalog.max_possible_score(),
            count = EXPECTED_USE_CASES,
            industry_id = result.company_info.industry,
        )
    }

    /// Priority is purely positional (90, 80, ...); feasibility uses the
    /// simplified two-factor variant since generated entries carry no
    /// curated maturity calibration.
    fn score_generated(
        &self,
        use_cases: Vec<UseCase>,
        result: &AssessmentResult,
    ) -> Vec<UseCaseRecommendation> {
        use_cases
            .into_iter()
            .enumerate()
            .map(|(rank, use_case)| UseCaseRecommendation {
                feasibility_score: simplified_feasibility(&use_case, result),
                priority_score: (90 - 10 * rank as i32).clamp(0, 100) as u8,
                reasoning: generated_reasoning(&use_case, result),
                adapted_steps: use_case.next_steps.clone(),
                use_case,
            })
            .collect()
    }

    fn fallback(&self, result: &AssessmentResult) -> DynamicRecommendations {
        let use_case = fallback_use_case(result);
        DynamicRecommendations {
            recommendations: vec![UseCaseRecommendation {
                feasibility_score: FALLBACK_FEASIBILITY,
                priority_score: FALLBACK_PRIORITY,
                reasoning: "Dynamische Generierung nicht verfügbar, aber dieser Use Case ist \
                            grundsätzlich für alle Unternehmen geeignet."
                    .to_string(),
                adapted_steps: use_case.next_steps.clone(),
                use_case,
            }],
            degraded: true,
        }
    }
}

fn system_instructions() -> &'static str {
    "Du bist ein AI-Strategieexperte. Generiere EXAKT 5 Use Cases als JSON Array. \
     Antworte NUR mit JSON, ohne zusätzliche Texte."
}

/// Validate the collaborator's structured response: strip markdown fences,
/// parse, and require exactly five well-formed use cases. Anything else is
/// rejected so the caller falls back.
pub(crate) fn parse_use_cases(raw: &str) -> Result<Vec<UseCase>, GenerationError> {
    let mut content = raw.trim();
    if let Some(stripped) = content.strip_prefix("```json") {
        content = stripped;
    } else if let Some(stripped) = content.strip_prefix("```") {
        content = stripped;
    }
    content = content.strip_suffix("```").unwrap_or(content).trim();

    let use_cases: Vec<UseCase> = serde_json::from_str(content)
        .map_err(|err| GenerationError::Malformed(err.to_string()))?;

    if use_cases.len() != EXPECTED_USE_CASES {
        return Err(GenerationError::Malformed(format!(
            "expected {EXPECTED_USE_CASES} use cases, got {}",
            use_cases.len()
        )));
    }

    Ok(use_cases)
}

fn simplified_feasibility(use_case: &UseCase, result: &AssessmentResult) -> u8 {
    let mut score: i32 = 60;

    score += match use_case.complexity {
        Complexity::Low if result.score < 40 => 20,
        Complexity::Medium if result.score >= 30 => 10,
        Complexity::High if result.score >= 50 => 15,
        _ => -15,
    };

    let max_cost = use_case.estimated_cost.max;
    score += match result.company_info.company_size {
        CompanySize::Micro if max_cost <= 50_000 => 15,
        CompanySize::Small if max_cost <= 100_000 => 10,
        CompanySize::Medium if max_cost <= 300_000 => 10,
        _ => 0,
    };

    score.clamp(0, 100) as u8
}

fn generated_reasoning(use_case: &UseCase, result: &AssessmentResult) -> String {
    let mut reasons: Vec<&str> = Vec::new();

    if use_case.complexity == Complexity::Low {
        reasons.push("Einfache Umsetzung, ideal für den Einstieg");
    }
    if use_case.estimated_roi.percentage > 200 {
        reasons.push("Sehr hoher ROI erwartet");
    }
    if use_case.category == UseCaseCategory::Automation && result.score < 50 {
        reasons.push("Automatisierung bringt schnelle Erfolge");
    }

    if reasons.is_empty() {
        "Passt gut zu Ihrem aktuellen Entwicklungsstand.".to_string()
    } else {
        let mut text = reasons.join(". ");
        text.push('.');
        text
    }
}

fn fallback_use_case(result: &AssessmentResult) -> UseCase {
    UseCase {
        id: "fallback-automation".to_string(),
        title: "Prozessautomatisierung".to_string(),
        description: "Automatisierung wiederkehrender Geschäftsprozesse zur \
                      Effizienzsteigerung."
            .to_string(),
        industry: result.company_info.industry.clone(),
        category: UseCaseCategory::Automation,
        complexity: Complexity::Low,
        time_to_implement: "2-4 Monate".to_string(),
        required_maturity_level: RequiredMaturity::Beginner,
        estimated_cost: CostRange {
            min: 20_000,
            max: 80_000,
            currency: "CHF".to_string(),
        },
        estimated_roi: RoiEstimate {
            timeframe: "12 Monate".to_string(),
            percentage: 200,
            description: "Zeitersparnis und Kostenreduktion".to_string(),
        },
        prerequisites: vec![
            "Dokumentierte Prozesse".to_string(),
            "Management Buy-in".to_string(),
        ],
        benefits: vec![
            "Effizienzsteigerung".to_string(),
            "Kosteneinsparung".to_string(),
            "Weniger Fehler".to_string(),
        ],
        risks: vec![
            "Change Management".to_string(),
            "Wartungsaufwand".to_string(),
        ],
        technologies: vec![
            "RPA".to_string(),
            "Workflow Automation".to_string(),
        ],
        next_steps: vec![
            "Prozessanalyse".to_string(),
            "Tool-Auswahl".to_string(),
            "Pilotprojekt".to_string(),
            "Rollout".to_string(),
        ],
    }
}

fn size_profile(size: CompanySize) -> (&'static str, &'static str) {
    match size {
        CompanySize::Micro => ("10.000-50.000", "sehr begrenzt"),
        CompanySize::Small => ("25.000-100.000", "begrenzt"),
        CompanySize::Medium => ("50.000-300.000", "mittel"),
        CompanySize::Large => ("100.000-1.000.000", "gut"),
        CompanySize::Enterprise => ("500.000-5.000.000", "sehr gut"),
    }
}
