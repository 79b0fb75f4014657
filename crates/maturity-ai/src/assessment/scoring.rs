use std::collections::BTreeSet;
use std::sync::Arc;

use super::catalog::AssessmentCatalog;
use super::domain::{
    Answer, AssessmentResult, CompanyInfo, CompanySize, Delta, IndustryId, MaturityLevel,
};

/// Invalid-input failures raised synchronously by the engines. These are
/// caller errors and the only failure class that surfaces as a hard error;
/// everything else in the pipeline degrades with a fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("no answers supplied")]
    EmptyAnswers,
    #[error("answer for question {question_id} has score {score}, expected {min}..={max}")]
    ScoreOutOfRange {
        question_id: u16,
        score: u8,
        min: u8,
        max: u8,
    },
    #[error("answer references unknown question {question_id}")]
    UnknownQuestion { question_id: u16 },
    #[error("question {question_id} answered more than once")]
    DuplicateAnswer { question_id: u16 },
    #[error("incomplete assessment: {answered} of {expected} questions answered")]
    IncompleteAnswers { answered: usize, expected: usize },
    #[error("unknown industry '{0}'")]
    UnknownIndustry(String),
}

/// Deterministic, side-effect-free converter from raw answers to an
/// [`AssessmentResult`]. Holds only the immutable catalog.
pub struct ScoringEngine {
    catalog: Arc<AssessmentCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<AssessmentCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AssessmentCatalog {
        &self.catalog
    }

    /// Compute the full assessment result. Invalid answers fail loudly
    /// instead of being clamped or dropped; a silently wrong score is worse
    /// than a rejected submission.
    pub fn compute_result(
        &self,
        self_assessment: MaturityLevel,
        answers: &[Answer],
        company_info: &CompanyInfo,
    ) -> Result<AssessmentResult, AssessmentError> {
        self.validate(answers, company_info)?;

        let score: u32 = answers.iter().map(|answer| answer.score as u32).sum();
        let calculated_level = self.level_from_score(score);
        let delta = Delta::between(calculated_level, self_assessment);

        Ok(AssessmentResult {
            company_info: company_info.clone(),
            self_assessment,
            calculated_level,
            score,
            level_description: self.catalog.level_description(calculated_level).to_string(),
            delta,
            insight: insight_for_delta(delta).to_string(),
            next_steps: self.next_steps(calculated_level, company_info),
        })
    }

    fn validate(
        &self,
        answers: &[Answer],
        company_info: &CompanyInfo,
    ) -> Result<(), AssessmentError> {
        if answers.is_empty() {
            return Err(AssessmentError::EmptyAnswers);
        }

        let min = self.catalog.min_answer_score();
        let max = self.catalog.max_answer_score();
        let mut seen = BTreeSet::new();

        for answer in answers {
            if answer.score < min || answer.score > max {
                return Err(AssessmentError::ScoreOutOfRange {
                    question_id: answer.question_id,
                    score: answer.score,
                    min,
                    max,
                });
            }
            if !self.catalog.contains_question(answer.question_id) {
                return Err(AssessmentError::UnknownQuestion {
                    question_id: answer.question_id,
                });
            }
            if !seen.insert(answer.question_id) {
                return Err(AssessmentError::DuplicateAnswer {
                    question_id: answer.question_id,
                });
            }
        }

        let expected = self.catalog.questions().len();
        if seen.len() != expected {
            return Err(AssessmentError::IncompleteAnswers {
                answered: seen.len(),
                expected,
            });
        }

        if !self.catalog.contains_industry(&company_info.industry) {
            return Err(AssessmentError::UnknownIndustry(
                company_info.industry.as_str().to_string(),
            ));
        }

        Ok(())
    }

    /// Partition the score domain into five contiguous bands. Edges are
    /// derived from the catalog (`max_possible * i / 5`), which yields the
    /// historical 15/30/45/60 cut points for the 15-question reference
    /// catalog. Edge values belong to the lower band.
    fn level_from_score(&self, score: u32) -> MaturityLevel {
        let max_possible = self.catalog.max_possible_score();
        let bands = MaturityLevel::ORDERED.len() as u32;

        for (index, level) in MaturityLevel::ORDERED.into_iter().enumerate() {
            let upper = max_possible * (index as u32 + 1) / bands;
            if score <= upper {
                return level;
            }
        }
        MaturityLevel::Disrupter
    }

    /// Next-step advice composed from three independently keyed fragments,
    /// concatenated base + industry + size.
    fn next_steps(&self, level: MaturityLevel, company_info: &CompanyInfo) -> String {
        let mut advice = String::from(base_next_steps(level));
        advice.push(' ');
        advice.push_str(industry_next_steps(&company_info.industry));
        advice.push(' ');
        advice.push_str(size_next_steps(company_info.company_size));
        advice
    }
}

/// Insight wording depends only on the delta's sign, never its magnitude.
fn insight_for_delta(delta: Delta) -> &'static str {
    match delta.value() {
        0 => {
            "Ihre Selbsteinschätzung entspricht dem berechneten Reifegrad. Sie haben eine \
             realistische Sicht auf Ihren aktuellen AI-Status."
        }
        d if d > 0 => {
            "Sie sind weiter fortgeschritten als ursprünglich angenommen! Ihr Unternehmen zeigt \
             bereits stärkere AI-Reife als selbst eingeschätzt. Dies deutet auf vorhandene, \
             möglicherweise noch nicht voll erkannte AI-Potentiale hin."
        }
        _ => {
            "Ihre Selbsteinschätzung war etwas optimistischer als die Bewertung zeigt. Das ist \
             völlig normal und bietet eine gute Ausgangslage, um konkrete Entwicklungsschritte \
             zu definieren."
        }
    }
}

fn base_next_steps(level: MaturityLevel) -> &'static str {
    match level {
        MaturityLevel::Resister => {
            "Starten Sie mit der Sensibilisierung des Managements für AI-Potentiale. \
             Organisieren Sie Workshops und definieren Sie erste Use Cases. Entwickeln Sie eine \
             grundlegende AI-Strategie."
        }
        MaturityLevel::Explorer => {
            "Formalisieren Sie Ihre AI-Initiativen durch eine klare Roadmap. Investieren Sie in \
             Schulungen und pilotieren Sie erste konkrete AI-Anwendungen in ausgewählten \
             Bereichen."
        }
        MaturityLevel::Player => {
            "Skalieren Sie erfolgreiche AI-Anwendungen und bauen Sie interne AI-Expertise auf. \
             Etablieren Sie Governance-Strukturen und integrieren Sie AI stärker in Ihre \
             Geschäftsprozesse."
        }
        MaturityLevel::Transformer => {
            "Erweitern Sie Ihre AI-Anwendungen auf neue Geschäftsbereiche. Entwickeln Sie \
             innovative AI-basierte Services und stärken Sie Ihre Position als AI-Leader in \
             Ihrer Branche."
        }
        MaturityLevel::Disrupter => {
            "Nutzen Sie Ihre AI-Expertise für disruptive Innovationen. Teilen Sie Ihr Wissen \
             als Thought Leader und erkunden Sie neue Geschäftsmodelle durch fortschrittliche \
             AI-Technologien."
        }
    }
}

// Partial table; industries without an entry get the generic addendum.
fn industry_next_steps(industry: &IndustryId) -> &'static str {
    match industry.as_str() {
        "banking-finance" => {
            "Fokussieren Sie auf Compliance und Risikomanagement; Fraud Detection und Customer \
             Experience eignen sich als Einstiegspunkte."
        }
        "healthcare" => {
            "Priorisieren Sie Datenschutz und medizinische Compliance; Diagnostik und \
             Patientenbetreuung sind geeignete Startbereiche."
        }
        "production" => {
            "Predictive Maintenance ist ein idealer Einstiegspunkt; treiben Sie \
             Qualitätskontrolle und Automatisierung voran."
        }
        "it-software" => {
            "Führen Sie einen AI-First Development Approach ein und implementieren Sie \
             Entwicklertools und Code-Assistenten."
        }
        "retail" => {
            "Setzen Sie auf Personalisierung, Demand Forecasting und Customer Journey \
             Optimierung."
        }
        _ => {
            "Identifizieren Sie branchenspezifische AI-Anwendungen und adaptieren Sie Best \
             Practices aus ähnlichen Industrien."
        }
    }
}

fn size_next_steps(size: CompanySize) -> &'static str {
    match size {
        CompanySize::Micro | CompanySize::Small => {
            "Starten Sie mit kostengünstigen Cloud-AI-Services, fokussieren Sie auf Quick Wins \
             und nutzen Sie externe Expertise."
        }
        CompanySize::Medium => {
            "Bauen Sie eine dedizierte AI-Taskforce auf und pilotieren Sie Projekte in \
             verschiedenen Abteilungen."
        }
        CompanySize::Large => {
            "Etablieren Sie ein AI Center of Excellence und implementieren Sie \
             unternehmensweite AI-Governance."
        }
        CompanySize::Enterprise => {
            "Positionieren Sie AI als strategischen Wettbewerbsvorteil und investieren Sie in \
             eigene AI-Forschung."
        }
    }
}
