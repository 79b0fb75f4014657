use serde::{Deserialize, Serialize};

use super::domain::{AssessmentResult, CompanySize, IndustryId, MaturityLevel};
use super::matching::{rank_by_level_match, select_matches, CatalogMatch};

/// Solution offering from the product catalog. Static data, matched against
/// assessments but never created at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "targetMaturityLevels")]
    pub target_maturity_levels: Vec<MaturityLevel>,
    #[serde(rename = "targetIndustries")]
    pub target_industries: Vec<IndustryId>,
    #[serde(rename = "targetCompanySizes")]
    pub target_company_sizes: Vec<CompanySize>,
}

impl CatalogMatch for AIProduct {
    fn target_levels(&self) -> &[MaturityLevel] {
        &self.target_maturity_levels
    }

    fn target_industries(&self) -> &[IndustryId] {
        &self.target_industries
    }

    fn target_sizes(&self) -> &[CompanySize] {
        &self.target_company_sizes
    }
}

/// Products matching at least two of three criteria, maturity matches first.
pub fn recommend_products<'a>(
    catalog: &'a [AIProduct],
    result: &AssessmentResult,
) -> Vec<&'a AIProduct> {
    let matches = select_matches(
        catalog,
        result.calculated_level,
        &result.company_info.industry,
        result.company_info.company_size,
        2,
    );
    rank_by_level_match(matches, result.calculated_level)
}

/// The production offering list.
pub fn reference_products() -> Vec<AIProduct> {
    use CompanySize::*;
    use MaturityLevel::*;

    let industries = |ids: &[&str]| -> Vec<IndustryId> {
        ids.iter().map(|id| IndustryId::new(*id)).collect()
    };

    vec![
        AIProduct {
            id: "ai-readiness-workshop".to_string(),
            name: "AI Readiness Workshop".to_string(),
            description: "Eintägiger Workshop zur Sensibilisierung von Management und \
                          Mitarbeitern für AI-Potentiale inklusive erster Use-Case-Ideen."
                .to_string(),
            target_maturity_levels: vec![Resister, Explorer],
            target_industries: industries(&[
                "banking-finance",
                "insurance",
                "consulting",
                "retail",
                "healthcare",
                "public",
                "other",
            ]),
            target_company_sizes: vec![Micro, Small, Medium],
        },
        AIProduct {
            id: "ai-strategy-sprint".to_string(),
            name: "AI Strategy Sprint".to_string(),
            description: "Vierwöchiges Strategieprogramm: Reifegrad-Analyse, priorisierte \
                          Roadmap und Governance-Grundlagen für die ersten AI-Initiativen."
                .to_string(),
            target_maturity_levels: vec![Explorer, Player],
            target_industries: industries(&[
                "banking-finance",
                "insurance",
                "it-software",
                "manufacturing",
                "production",
                "logistics",
            ]),
            target_company_sizes: vec![Small, Medium, Large],
        },
        AIProduct {
            id: "process-automation-suite".to_string(),
            name: "Process Automation Suite".to_string(),
            description: "Einführung von RPA- und Workflow-Automatisierung für wiederkehrende \
                          Geschäftsprozesse mit messbarem ROI innerhalb weniger Monate."
                .to_string(),
            target_maturity_levels: vec![Explorer, Player, Transformer],
            target_industries: industries(&[
                "production",
                "manufacturing",
                "logistics",
                "retail",
                "public",
                "other",
            ]),
            target_company_sizes: vec![Small, Medium, Large, Enterprise],
        },
        AIProduct {
            id: "data-platform-foundation".to_string(),
            name: "Data Platform Foundation".to_string(),
            description: "Aufbau einer skalierbaren Daten- und Analytics-Plattform als \
                          Grundlage für produktive Machine-Learning-Anwendungen.".to_string(),
            target_maturity_levels: vec![Player, Transformer],
            target_industries: industries(&[
                "banking-finance",
                "insurance",
                "telecom",
                "energy",
                "chemical-pharma",
                "healthcare",
            ]),
            target_company_sizes: vec![Medium, Large, Enterprise],
        },
        AIProduct {
            id: "ml-competence-center".to_string(),
            name: "ML Competence Center".to_string(),
            description: "Aufbau eines internen AI-Teams inklusive MLOps-Tooling, \
                          Schulungsprogramm und Betriebsmodell für produktive Modelle."
                .to_string(),
            target_maturity_levels: vec![Transformer, Disrupter],
            target_industries: industries(&[
                "it-software",
                "telecom",
                "banking-finance",
                "automotive",
                "media",
            ]),
            target_company_sizes: vec![Large, Enterprise],
        },
        AIProduct {
            id: "ai-innovation-lab".to_string(),
            name: "AI Innovation Lab".to_string(),
            description: "Gemeinsames Innovationslabor zur Entwicklung disruptiver, \
                          AI-getriebener Geschäftsmodelle und Services.".to_string(),
            target_maturity_levels: vec![Transformer, Disrupter],
            target_industries: industries(&[
                "automotive",
                "media",
                "it-software",
                "energy",
                "chemical-pharma",
            ]),
            target_company_sizes: vec![Medium, Large, Enterprise],
        },
    ]
}
