use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::AssessmentCatalog;
use crate::assessment::domain::{
    Answer, AssessmentResult, CompanyInfo, CompanySize, IndustryId, MaturityLevel,
};
use crate::assessment::generation::{GenerationError, GenerationRequest, TextGenerator};
use crate::assessment::products::reference_products;
use crate::assessment::repository::{
    AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError,
};
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::service::{AssessmentService, AssessmentSubmission};
use crate::assessment::usecases::{
    reference_use_cases, Complexity, CostRange, RequiredMaturity, RoiEstimate, UseCase,
    UseCaseCategory,
};

pub(super) fn catalog() -> Arc<AssessmentCatalog> {
    Arc::new(AssessmentCatalog::reference())
}

/// Answers summing to exactly `total`, built by bumping questions in order
/// from the all-ones baseline.
pub(super) fn answers_with_total(total: u32) -> Vec<Answer> {
    let catalog = AssessmentCatalog::reference();
    let questions = catalog.questions().len() as u32;
    let span = (catalog.max_answer_score() - catalog.min_answer_score()) as u32;
    assert!(
        total >= questions && total <= questions * catalog.max_answer_score() as u32,
        "total {total} outside the reachable score range"
    );

    let mut extra = total - questions;
    catalog
        .questions()
        .iter()
        .map(|question| {
            let bump = extra.min(span);
            extra -= bump;
            Answer {
                question_id: question.id,
                score: catalog.min_answer_score() + bump as u8,
            }
        })
        .collect()
}

pub(super) fn company(industry: &str, size: CompanySize) -> CompanyInfo {
    CompanyInfo {
        industry: IndustryId::new(industry),
        company_size: size,
    }
}

pub(super) fn scored_result(
    total: u32,
    self_assessment: MaturityLevel,
    industry: &str,
    size: CompanySize,
) -> AssessmentResult {
    let engine = ScoringEngine::new(catalog());
    engine
        .compute_result(
            self_assessment,
            &answers_with_total(total),
            &company(industry, size),
        )
        .expect("fixture produces a valid assessment")
}

pub(super) fn submission(total: u32, self_assessment: MaturityLevel) -> AssessmentSubmission {
    AssessmentSubmission {
        self_assessment,
        answers: answers_with_total(total),
        company_info: company("banking-finance", CompanySize::Medium),
        email: Some("cto@example.ch".to_string()),
        completion_seconds: Some(240),
    }
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<BTreeMap<String, AssessmentRecord>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("lock poisoned").len()
    }

    pub(super) fn first(&self) -> Option<AssessmentRecord> {
        self.records
            .lock()
            .expect("lock poisoned")
            .values()
            .next()
            .cloned()
    }
}

impl AssessmentRepository for MemoryRepository {
    fn save(&self, record: AssessmentRecord) -> Result<AssessmentId, RepositoryError> {
        let mut records = self.records.lock().expect("lock poisoned");
        let id = format!("assessment-{:04}", records.len() + 1);
        records.insert(id.clone(), record);
        Ok(AssessmentId(id))
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("lock poisoned")
            .get(&id.0)
            .cloned())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn save(&self, _record: AssessmentRecord) -> Result<AssessmentId, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

/// Generator double returning a fixed response for every request.
pub(super) struct StubGenerator {
    pub(super) response: String,
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Ok(self.response.clone())
    }
}

/// Generator double that always fails, driving the fallback paths.
pub(super) struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Err(GenerationError::Timeout)
    }
}

pub(super) fn build_service(
    generator: Option<Arc<dyn TextGenerator>>,
) -> (Arc<AssessmentService<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(AssessmentService::new(
        catalog(),
        Arc::new(reference_products()),
        Arc::new(reference_use_cases()),
        Arc::clone(&repository),
        generator,
    ));
    (service, repository)
}

/// A syntactically valid collaborator response carrying exactly five use
/// cases in wire shape.
pub(super) fn generated_use_cases_json() -> String {
    let cases: Vec<UseCase> = (1..=5)
        .map(|index| generated_use_case(&format!("generated-{index}")))
        .collect();
    serde_json::to_string(&cases).expect("fixture serializes")
}

pub(super) fn generated_use_case(id: &str) -> UseCase {
    UseCase {
        id: id.to_string(),
        title: "Automatisierte Angebotserstellung".to_string(),
        description: "Generierung von Angeboten aus CRM-Daten.".to_string(),
        industry: IndustryId::new("banking-finance"),
        category: UseCaseCategory::Automation,
        complexity: Complexity::Low,
        time_to_implement: "6-12 Wochen".to_string(),
        required_maturity_level: RequiredMaturity::Beginner,
        estimated_cost: CostRange {
            min: 10_000,
            max: 40_000,
            currency: "CHF".to_string(),
        },
        estimated_roi: RoiEstimate {
            timeframe: "6 Monate".to_string(),
            percentage: 180,
            description: "Schnellere Angebotsdurchlaufzeit".to_string(),
        },
        prerequisites: vec!["CRM-Zugriff".to_string()],
        benefits: vec!["Zeitersparnis".to_string()],
        risks: vec!["Datenqualität".to_string()],
        technologies: vec!["LLM".to_string()],
        next_steps: vec!["Pilot definieren".to_string()],
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body is readable");
    serde_json::from_slice(&body).expect("body is json")
}
