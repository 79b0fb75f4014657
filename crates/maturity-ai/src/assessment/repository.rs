use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Answer, AssessmentResult};

/// Opaque identifier handed back by storage; the core never inspects its
/// format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// What gets persisted per completed assessment: the finished result plus
/// the raw answers and session metadata. Storage is a cache/log, never the
/// source of truth for recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub result: AssessmentResult,
    pub answers: Vec<Answer>,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Storage abstraction so the service can be exercised with in-memory
/// doubles. Saves are best-effort from the caller's perspective.
pub trait AssessmentRepository: Send + Sync {
    fn save(&self, record: AssessmentRecord) -> Result<AssessmentId, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
