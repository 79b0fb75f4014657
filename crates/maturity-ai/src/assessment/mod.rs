//! AI maturity assessment pipeline: questionnaire scoring, maturity
//! classification, product and use-case matching, and recommendation
//! composition with degradable text generation.

pub mod catalog;
pub mod domain;
pub mod generation;
pub(crate) mod matching;
pub mod narrative;
pub mod products;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod usecases;

#[cfg(test)]
mod tests;

pub use catalog::{AssessmentCatalog, IndustryInfo, MaturityLevelInfo};
pub use domain::{
    Answer, AssessmentResult, CompanyInfo, CompanySize, Delta, IndustryId, MaturityLevel, Question,
};
pub use generation::{GenerationError, GenerationRequest, OpenAiGenerator, TextGenerator};
pub use narrative::{generate_narrative, Narrative};
pub use products::{recommend_products, reference_products, AIProduct};
pub use repository::{AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError};
pub use router::assessment_router;
pub use scoring::{AssessmentError, ScoringEngine};
pub use service::{
    AssessmentService, AssessmentSubmission, ComposedRecommendation, UseCaseStrategy,
};
pub use usecases::{
    reference_use_cases, DynamicUseCaseEngine, UseCase, UseCaseRecommendation,
    UseCaseRecommendationEngine,
};
