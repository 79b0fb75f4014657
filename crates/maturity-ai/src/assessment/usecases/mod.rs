//! Use-case recommendation: catalog types, the static/catalog strategy, and
//! the dynamic strategy backed by the text-generation collaborator.

pub mod catalog;
pub mod dynamic;
pub mod recommend;

use serde::{Deserialize, Serialize};

use super::domain::IndustryId;

pub use catalog::reference_use_cases;
pub use dynamic::DynamicUseCaseEngine;
pub use recommend::UseCaseRecommendationEngine;

/// Functional category of a use case; feeds the priority relevance bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UseCaseCategory {
    Automation,
    Analytics,
    CustomerExperience,
    Operations,
    Innovation,
}

/// Implementation complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Maturity tier a use case demands before it is realistically achievable.
/// Compared against the assessment's one-based level rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredMaturity {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl RequiredMaturity {
    pub fn numeric(self) -> u8 {
        match self {
            RequiredMaturity::Beginner => 1,
            RequiredMaturity::Intermediate => 2,
            RequiredMaturity::Advanced => 3,
            RequiredMaturity::Expert => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub timeframe: String,
    pub percentage: u32,
    pub description: String,
}

/// Catalog use case. Field names serialize in camelCase because the same
/// shape doubles as the JSON contract for collaborator-generated use cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub industry: IndustryId,
    pub category: UseCaseCategory,
    pub complexity: Complexity,
    pub time_to_implement: String,
    pub required_maturity_level: RequiredMaturity,
    pub estimated_cost: CostRange,
    #[serde(rename = "estimatedROI")]
    pub estimated_roi: RoiEstimate,
    pub prerequisites: Vec<String>,
    pub benefits: Vec<String>,
    pub risks: Vec<String>,
    pub technologies: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Derived, ephemeral wrapper around a use case: recomputed per request and
/// never treated as authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseRecommendation {
    pub use_case: UseCase,
    pub feasibility_score: u8,
    pub priority_score: u8,
    pub reasoning: String,
    pub adapted_steps: Vec<String>,
}
