use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use maturity_ai::assessment::{
    AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local assessment store. Completed assessments are a lead log,
/// not operational state, so losing them on restart is acceptable.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<BTreeMap<String, AssessmentRecord>>>,
}

impl InMemoryAssessmentRepository {
    pub(crate) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn save(&self, record: AssessmentRecord) -> Result<AssessmentId, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let id = format!("assessment-{:06}", guard.len() + 1);
        guard.insert(id.clone(), record);
        Ok(AssessmentId(id))
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id.0).cloned())
    }
}
