use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::AssessmentCatalog;
use super::domain::{Answer, AssessmentResult, CompanyInfo, MaturityLevel};
use super::generation::TextGenerator;
use super::narrative::generate_narrative;
use super::products::{recommend_products, AIProduct};
use super::repository::{AssessmentRecord, AssessmentRepository};
use super::scoring::{AssessmentError, ScoringEngine};
use super::usecases::dynamic::DynamicUseCaseEngine;
use super::usecases::recommend::UseCaseRecommendationEngine;
use super::usecases::{UseCase, UseCaseRecommendation};

/// Completed questionnaire as submitted over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    pub self_assessment: MaturityLevel,
    pub answers: Vec<Answer>,
    pub company_info: CompanyInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_seconds: Option<u32>,
}

/// Which use-case source to consult: the curated catalog or the text
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCaseStrategy {
    #[default]
    Static,
    Dynamic,
}

/// Combined response for clients that want the whole recommendation package
/// in one round trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedRecommendation {
    pub result: AssessmentResult,
    pub narrative: String,
    pub products: Vec<AIProduct>,
    pub top_use_cases: Vec<UseCaseRecommendation>,
    pub degraded: bool,
}

const COMPOSED_USE_CASES: usize = 2;

/// Service composing the scoring engine, the two recommendation engines,
/// storage, and the optional text collaborator.
pub struct AssessmentService<R> {
    catalog: Arc<AssessmentCatalog>,
    products: Arc<Vec<AIProduct>>,
    scoring: ScoringEngine,
    use_cases: UseCaseRecommendationEngine,
    dynamic: DynamicUseCaseEngine,
    repository: Arc<R>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(
        catalog: Arc<AssessmentCatalog>,
        products: Arc<Vec<AIProduct>>,
        use_cases: Arc<Vec<UseCase>>,
        repository: Arc<R>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            scoring: ScoringEngine::new(Arc::clone(&catalog)),
            use_cases: UseCaseRecommendationEngine::new(Arc::clone(&catalog), use_cases),
            dynamic: DynamicUseCaseEngine::new(Arc::clone(&catalog)),
            catalog,
            products,
            repository,
            generator,
        }
    }

    pub fn catalog(&self) -> &AssessmentCatalog {
        &self.catalog
    }

    pub fn products(&self) -> &[AIProduct] {
        &self.products
    }

    /// Score a submission and persist it best-effort. Storage failure is
    /// logged but never blocks the response.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentResult, AssessmentError> {
        let result = self.scoring.compute_result(
            submission.self_assessment,
            &submission.answers,
            &submission.company_info,
        )?;

        let record = AssessmentRecord {
            result: result.clone(),
            answers: submission.answers,
            submitted_at: Utc::now(),
            completion_seconds: submission.completion_seconds,
            email: submission.email,
        };
        if let Err(err) = self.repository.save(record) {
            warn!(%err, "failed to persist assessment, continuing without storage");
        }

        Ok(result)
    }

    /// Product offerings matching the assessed company.
    pub fn product_recommendations(&self, result: &AssessmentResult) -> Vec<AIProduct> {
        recommend_products(&self.products, result)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Use-case recommendations via the requested strategy. The dynamic
    /// strategy degrades to its fixed fallback; the static strategy is
    /// always deterministic.
    pub async fn use_case_recommendations(
        &self,
        strategy: UseCaseStrategy,
        result: &AssessmentResult,
    ) -> (Vec<UseCaseRecommendation>, bool) {
        match strategy {
            UseCaseStrategy::Static => (self.use_cases.recommend(result), false),
            UseCaseStrategy::Dynamic => {
                let outcome = self.dynamic.recommend(self.generator_ref(), result).await;
                (outcome.recommendations, outcome.degraded)
            }
        }
    }

    /// One-shot package: narrative and dynamic use cases are produced
    /// concurrently, products synchronously.
    pub async fn compose(&self, result: &AssessmentResult) -> ComposedRecommendation {
        let narrative_fut = generate_narrative(self.generator_ref(), &self.catalog, result);
        let use_case_fut = self.dynamic.recommend(self.generator_ref(), result);
        let (narrative, dynamic) = tokio::join!(narrative_fut, use_case_fut);

        let mut top_use_cases = dynamic.recommendations;
        top_use_cases.truncate(COMPOSED_USE_CASES);

        ComposedRecommendation {
            result: result.clone(),
            narrative: narrative.text,
            products: self.product_recommendations(result),
            top_use_cases,
            degraded: narrative.degraded || dynamic.degraded,
        }
    }

    fn generator_ref(&self) -> Option<&dyn TextGenerator> {
        self.generator.as_deref()
    }
}
