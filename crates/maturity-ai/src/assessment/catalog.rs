use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{CompanySize, IndustryId, MaturityLevel, Question};

/// Presentation metadata for a maturity level. Not consulted by scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturityLevelInfo {
    pub level: MaturityLevel,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub characteristics: Vec<String>,
}

/// Industry catalog entry: stable identifier plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryInfo {
    pub id: IndustryId,
    pub label: String,
}

/// Immutable reference data consumed read-only by the scoring and matching
/// engines. Constructed explicitly (no module-level globals) so tests can
/// swap in reduced catalogs.
#[derive(Debug, Clone)]
pub struct AssessmentCatalog {
    questions: Vec<Question>,
    levels: Vec<MaturityLevelInfo>,
    industries: Vec<IndustryInfo>,
    similar_industries: BTreeMap<IndustryId, Vec<IndustryId>>,
    budget_thresholds: BTreeMap<CompanySize, u32>,
    min_answer_score: u8,
    max_answer_score: u8,
}

impl AssessmentCatalog {
    pub fn new(
        questions: Vec<Question>,
        levels: Vec<MaturityLevelInfo>,
        industries: Vec<IndustryInfo>,
        similar_industries: BTreeMap<IndustryId, Vec<IndustryId>>,
        budget_thresholds: BTreeMap<CompanySize, u32>,
        min_answer_score: u8,
        max_answer_score: u8,
    ) -> Self {
        Self {
            questions,
            levels,
            industries,
            similar_industries,
            budget_thresholds,
            min_answer_score,
            max_answer_score,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn levels(&self) -> &[MaturityLevelInfo] {
        &self.levels
    }

    pub fn industries(&self) -> &[IndustryInfo] {
        &self.industries
    }

    pub fn min_answer_score(&self) -> u8 {
        self.min_answer_score
    }

    pub fn max_answer_score(&self) -> u8 {
        self.max_answer_score
    }

    /// Upper bound of the score domain for the configured questionnaire.
    pub fn max_possible_score(&self) -> u32 {
        self.questions.len() as u32 * self.max_answer_score as u32
    }

    pub fn contains_question(&self, question_id: u16) -> bool {
        self.questions.iter().any(|q| q.id == question_id)
    }

    pub fn contains_industry(&self, industry: &IndustryId) -> bool {
        self.industries.iter().any(|info| &info.id == industry)
    }

    pub fn industry_label(&self, industry: &IndustryId) -> Option<&str> {
        self.industries
            .iter()
            .find(|info| &info.id == industry)
            .map(|info| info.label.as_str())
    }

    pub fn level_description(&self, level: MaturityLevel) -> &str {
        self.levels
            .iter()
            .find(|info| info.level == level)
            .map(|info| info.description.as_str())
            .unwrap_or_default()
    }

    /// Hand-authored adjacency between related verticals, used when an
    /// industry has no catalog use cases of its own. Unlisted industries
    /// map to the generic `other` bucket.
    pub fn similar_industries(&self, industry: &IndustryId) -> Vec<IndustryId> {
        self.similar_industries
            .get(industry)
            .cloned()
            .unwrap_or_else(|| vec![IndustryId::new("other")])
    }

    /// Budget ceiling (CHF) a company of the given size can realistically
    /// commit to a single use case. Falls back to the medium-company
    /// threshold for catalogs that omit a bucket.
    pub fn budget_threshold(&self, size: CompanySize) -> u32 {
        self.budget_thresholds
            .get(&size)
            .copied()
            .or_else(|| self.budget_thresholds.get(&CompanySize::Medium).copied())
            .unwrap_or(200_000)
    }

    /// The production questionnaire: 15 statements, 3 per level, scored on
    /// a 1-5 Likert scale.
    pub fn reference() -> Self {
        let questions = reference_questions();
        let levels = reference_levels();
        let industries = reference_industries();
        let similar_industries = reference_similar_industries();

        let budget_thresholds = BTreeMap::from([
            (CompanySize::Micro, 25_000),
            (CompanySize::Small, 75_000),
            (CompanySize::Medium, 200_000),
            (CompanySize::Large, 500_000),
            (CompanySize::Enterprise, 1_000_000),
        ]);

        Self::new(
            questions,
            levels,
            industries,
            similar_industries,
            budget_thresholds,
            1,
            5,
        )
    }
}

fn reference_questions() -> Vec<Question> {
    let statements: [(MaturityLevel, &str); 15] = [
        (
            MaturityLevel::Resister,
            "Unser Unternehmen beschäftigt sich aktiv mit den Möglichkeiten von Künstlicher Intelligenz.",
        ),
        (
            MaturityLevel::Resister,
            "Mitarbeiter in unserem Unternehmen haben grundlegendes Wissen über AI-Technologien.",
        ),
        (
            MaturityLevel::Resister,
            "Das Management sieht AI als relevante Technologie für unser Unternehmen.",
        ),
        (
            MaturityLevel::Explorer,
            "Wir haben erste Guidelines für den Umgang mit AI-Tools entwickelt.",
        ),
        (
            MaturityLevel::Explorer,
            "Einzelne Mitarbeiter experimentieren bereits mit AI-Tools wie ChatGPT oder ähnlichen.",
        ),
        (
            MaturityLevel::Explorer,
            "Das Management zeigt Interesse an den Möglichkeiten von Künstlicher Intelligenz.",
        ),
        (
            MaturityLevel::Player,
            "Wir haben eine konkrete Roadmap für die Implementierung von AI-Lösungen erstellt.",
        ),
        (
            MaturityLevel::Player,
            "Unser Unternehmen investiert gezielt in die Kompetenzentwicklung im Bereich AI.",
        ),
        (
            MaturityLevel::Player,
            "Wir setzen AI bereits in spezifischen Anwendungsbereichen produktiv ein.",
        ),
        (
            MaturityLevel::Transformer,
            "AI ist ein zentraler Bestandteil unserer Unternehmensstrategie geworden.",
        ),
        (
            MaturityLevel::Transformer,
            "Wir haben ein eigenes internes AI-Team oder AI-Experten etabliert.",
        ),
        (
            MaturityLevel::Transformer,
            "Ethik und Datenqualität stehen im Zentrum unserer AI-Initiativen.",
        ),
        (
            MaturityLevel::Disrupter,
            "AI-Technologien gestalten aktiv unsere Geschäftsmodelle und Wertschöpfungsketten.",
        ),
        (
            MaturityLevel::Disrupter,
            "Wir haben einen hohen Grad an Automatisierung durch AI-Systeme erreicht.",
        ),
        (
            MaturityLevel::Disrupter,
            "Ethische AI-Prinzipien sind fest in unserer Unternehmenskultur verankert.",
        ),
    ];

    statements
        .into_iter()
        .enumerate()
        .map(|(index, (level, statement))| Question {
            id: index as u16 + 1,
            level,
            statement: statement.to_string(),
        })
        .collect()
}

fn reference_levels() -> Vec<MaturityLevelInfo> {
    vec![
        MaturityLevelInfo {
            level: MaturityLevel::Resister,
            description: "Keine oder sehr begrenzte AI-Nutzung im Unternehmen".to_string(),
            color: "bg-red-500".to_string(),
            icon: "🚫".to_string(),
            characteristics: vec![
                "Keine AI-Strategie vorhanden".to_string(),
                "Kaum Verständnis für AI-Potentiale".to_string(),
                "Unsicherheit gegenüber neuen Technologien".to_string(),
            ],
        },
        MaturityLevelInfo {
            level: MaturityLevel::Explorer,
            description: "Erste Schritte und Experimente mit AI-Technologien".to_string(),
            color: "bg-orange-500".to_string(),
            icon: "🔍".to_string(),
            characteristics: vec![
                "Erste AI-Guidelines entwickelt".to_string(),
                "Einzelne Mitarbeiter experimentieren".to_string(),
                "Bewusstsein für AI-Potentiale entsteht".to_string(),
            ],
        },
        MaturityLevelInfo {
            level: MaturityLevel::Player,
            description: "Strukturierte Herangehensweise an AI-Implementierung".to_string(),
            color: "bg-yellow-500".to_string(),
            icon: "⚡".to_string(),
            characteristics: vec![
                "AI-Roadmap vorhanden".to_string(),
                "Gezielte Kompetenzentwicklung".to_string(),
                "Erste produktive AI-Anwendungen".to_string(),
            ],
        },
        MaturityLevelInfo {
            level: MaturityLevel::Transformer,
            description: "AI als strategisches Kernelement des Unternehmens".to_string(),
            color: "bg-blue-500".to_string(),
            icon: "🚀".to_string(),
            characteristics: vec![
                "AI zentral in der Unternehmensstrategie".to_string(),
                "Eigenes AI-Team etabliert".to_string(),
                "Ethik und Datenqualität im Fokus".to_string(),
            ],
        },
        MaturityLevelInfo {
            level: MaturityLevel::Disrupter,
            description: "AI treibt Geschäftsmodellinnovation und Marktführerschaft".to_string(),
            color: "bg-green-500".to_string(),
            icon: "🌟".to_string(),
            characteristics: vec![
                "AI gestaltet Geschäftsmodelle".to_string(),
                "Hohe Automatisierung erreicht".to_string(),
                "Ethische AI-Prinzipien verankert".to_string(),
            ],
        },
    ]
}

fn reference_industries() -> Vec<IndustryInfo> {
    [
        ("automotive", "Automotive"),
        ("banking-finance", "Banking & Finance"),
        ("consulting", "Beratung & Consulting"),
        ("education", "Bildung & Forschung"),
        ("chemical-pharma", "Chemie & Pharma"),
        ("retail", "Einzelhandel"),
        ("energy", "Energie & Umwelt"),
        ("healthcare", "Gesundheitswesen"),
        ("it-software", "IT & Software"),
        ("logistics", "Logistik & Transport"),
        ("manufacturing", "Maschinenbau"),
        ("media", "Medien & Marketing"),
        ("public", "Öffentliche Verwaltung"),
        ("production", "Produktion & Fertigung"),
        ("telecom", "Telekommunikation"),
        ("tourism", "Tourismus & Gastronomie"),
        ("insurance", "Versicherung"),
        ("other", "Sonstige"),
    ]
    .into_iter()
    .map(|(id, label)| IndustryInfo {
        id: IndustryId::new(id),
        label: label.to_string(),
    })
    .collect()
}

fn reference_similar_industries() -> BTreeMap<IndustryId, Vec<IndustryId>> {
    let adjacency: [(&str, &[&str]); 17] = [
        ("banking-finance", &["insurance", "consulting"]),
        ("insurance", &["banking-finance", "consulting"]),
        ("consulting", &["banking-finance", "insurance", "it-software"]),
        ("it-software", &["consulting", "telecom"]),
        ("telecom", &["it-software", "media"]),
        ("media", &["telecom", "tourism"]),
        ("healthcare", &["education", "public"]),
        ("education", &["healthcare", "public"]),
        ("public", &["education", "healthcare"]),
        ("automotive", &["manufacturing", "logistics"]),
        ("manufacturing", &["automotive", "production"]),
        ("production", &["manufacturing", "logistics"]),
        ("logistics", &["automotive", "production", "retail"]),
        ("retail", &["logistics", "tourism"]),
        ("tourism", &["retail", "media"]),
        ("energy", &["manufacturing", "public"]),
        ("chemical-pharma", &["manufacturing", "healthcare"]),
    ];

    adjacency
        .into_iter()
        .map(|(id, neighbors)| {
            (
                IndustryId::new(id),
                neighbors.iter().map(|n| IndustryId::new(*n)).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_has_three_questions_per_level() {
        let catalog = AssessmentCatalog::reference();
        assert_eq!(catalog.questions().len(), 15);
        for level in MaturityLevel::ORDERED {
            let count = catalog
                .questions()
                .iter()
                .filter(|q| q.level == level)
                .count();
            assert_eq!(count, 3, "level {level} should have 3 questions");
        }
        assert_eq!(catalog.max_possible_score(), 75);
    }

    #[test]
    fn unlisted_industry_falls_back_to_other_bucket() {
        let catalog = AssessmentCatalog::reference();
        let similar = catalog.similar_industries(&IndustryId::new("other"));
        assert_eq!(similar, vec![IndustryId::new("other")]);

        let similar = catalog.similar_industries(&IndustryId::new("banking-finance"));
        assert!(similar.contains(&IndustryId::new("insurance")));
    }

    #[test]
    fn budget_threshold_defaults_to_medium_bucket() {
        let catalog = AssessmentCatalog::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            BTreeMap::new(),
            BTreeMap::from([(CompanySize::Medium, 150_000)]),
            1,
            5,
        );
        assert_eq!(catalog.budget_threshold(CompanySize::Micro), 150_000);
        assert_eq!(
            AssessmentCatalog::reference().budget_threshold(CompanySize::Enterprise),
            1_000_000
        );
    }
}
