//! Personalized narrative recommendation: generated by the text
//! collaborator when available, otherwise composed deterministically from
//! level-, industry-, and size-keyed advice fragments.

use tracing::warn;

use super::catalog::AssessmentCatalog;
use super::domain::{AssessmentResult, CompanySize, IndustryId, MaturityLevel};
use super::generation::{GenerationRequest, TextGenerator};

/// Narrative text plus a flag marking fallback (degraded) content.
#[derive(Debug, Clone)]
pub struct Narrative {
    pub text: String,
    pub degraded: bool,
}

pub async fn generate_narrative(
    generator: Option<&dyn TextGenerator>,
    catalog: &AssessmentCatalog,
    result: &AssessmentResult,
) -> Narrative {
    let Some(generator) = generator else {
        return Narrative {
            text: fallback_narrative(catalog, result),
            degraded: true,
        };
    };

    let request = GenerationRequest {
        system: "Du bist ein erfahrener AI-Strategieberater, der Unternehmen bei ihrer \
                 digitalen Transformation unterstützt."
            .to_string(),
        prompt: build_prompt(catalog, result),
        max_tokens: 800,
        temperature: 0.7,
    };

    match generator.generate(&request).await {
        Ok(text) => Narrative {
            text,
            degraded: false,
        },
        Err(err) => {
            warn!(%err, "narrative generation failed, serving static fallback");
            Narrative {
                text: fallback_narrative(catalog, result),
                degraded: true,
            }
        }
    }
}

fn build_prompt(catalog: &AssessmentCatalog, result: &AssessmentResult) -> String {
    let industry = catalog
        .industry_label(&result.company_info.industry)
        .unwrap_or("Allgemein");

    format!(
        "Erstelle basierend auf dem folgenden AI-Maturity Assessment eine ausführliche, \
         personalisierte Empfehlung (ca. 300-400 Wörter).\n\n\
         Assessment Ergebnisse:\n\
         - Unternehmen: {industry}, {size}\n\
         - Selbsteinschätzung: {self_assessment}\n\
         - Berechneter Reifegrad: {calculated}\n\
         - Score: {score}/{max}\n\
         - Delta: {delta}\n\n\
         Decke ab: aktuelle Situation, Branchenkontext, größenspezifische Strategie, konkrete \
         nächste Schritte, Zeitrahmen für 6-12 Monate sowie Risiken und Chancen. Schreibe \
         professionell, praxisorientiert und ermutigend. Verwende \"Sie\" als Anrede.",
        size = result.company_info.company_size,
        self_assessment = result.self_assessment,
        calculated = result.calculated_level,
        score = result.score,
        max = catalog.max_possible_score(),
        delta = result.delta,
    )
}

/// Deterministic substitute for the generated narrative: base advice keyed
/// by level, then the industry addendum, then the size addendum.
pub fn fallback_narrative(catalog: &AssessmentCatalog, result: &AssessmentResult) -> String {
    let mut narrative = base_advice(
        result.calculated_level,
        result.score,
        catalog.max_possible_score(),
    );
    narrative.push_str(industry_advice(&result.company_info.industry));
    narrative.push_str(size_advice(result.company_info.company_size));
    narrative.push_str(&format!("**Empfehlung:** {}", result.next_steps));
    narrative
}

fn base_advice(level: MaturityLevel, score: u32, max: u32) -> String {
    match level {
        MaturityLevel::Resister => format!(
            "Mit einem Score von {score}/{max} Punkten befinden Sie sich in der Anfangsphase \
             Ihrer AI-Reise. Dies ist eine ausgezeichnete Ausgangslage, um systematisch zu \
             starten:\n\n"
        ),
        MaturityLevel::Explorer => format!(
            "Ihr Score von {score}/{max} zeigt, dass Sie bereits erste wichtige Schritte \
             unternommen haben. Jetzt geht es darum, diese Experimente zu strukturieren:\n\n"
        ),
        MaturityLevel::Player => format!(
            "Mit {score}/{max} Punkten haben Sie eine solide Basis geschaffen. Der nächste \
             Schritt ist die Skalierung Ihrer AI-Initiativen:\n\n"
        ),
        MaturityLevel::Transformer => format!(
            "Ihr Score von {score}/{max} zeigt eine starke AI-Integration. Fokussieren Sie sich \
             nun auf Innovation und Marktführerschaft:\n\n"
        ),
        MaturityLevel::Disrupter => format!(
            "Exzellent! Mit {score}/{max} Punkten sind Sie bereits AI-Leader. Nutzen Sie diese \
             Position für disruptive Innovationen:\n\n"
        ),
    }
}

// Partial table keyed by industry id; everything else gets the generic
// adaptation advice.
fn industry_advice(industry: &IndustryId) -> &'static str {
    match industry.as_str() {
        "banking-finance" => {
            "• Fokus auf Compliance und Risikomanagement bei AI-Implementierung\n\
             • Fraud Detection und Customer Experience als Einstiegspunkte\n\
             • Regulatorische Anforderungen von Beginn an mitdenken\n\n"
        }
        "healthcare" => {
            "• Datenschutz und medizinische Compliance als oberste Priorität\n\
             • AI für Diagnostik und Patientenbetreuung als Startbereich\n\
             • Interoperabilität mit bestehenden Systemen berücksichtigen\n\n"
        }
        "production" => {
            "• Predictive Maintenance als idealer Einstiegspunkt\n\
             • Qualitätskontrolle und Automatisierung vorantreiben\n\
             • Integration in bestehende Fertigungslinien planen\n\n"
        }
        "it-software" => {
            "• AI-First Development Approach einführen\n\
             • Entwicklertools und Code-Assistenten implementieren\n\
             • Eigene AI-Produkte für Kunden entwickeln\n\n"
        }
        "retail" => {
            "• Personalisierung und Recommendation Engines\n\
             • Inventory Management und Demand Forecasting\n\
             • Customer Journey Optimization mit AI\n\n"
        }
        _ => {
            "• Branchenspezifische AI-Anwendungen identifizieren\n\
             • Best Practices aus ähnlichen Industrien adaptieren\n\n"
        }
    }
}

fn size_advice(size: CompanySize) -> &'static str {
    match size {
        CompanySize::Micro | CompanySize::Small => {
            "**Für Ihr Unternehmen empfehlen wir:**\n\
             • Start mit kostengünstigen Cloud-AI-Services\n\
             • Fokus auf Quick Wins und ROI-starke Anwendungen\n\
             • Externe Expertise nutzen für schnelleren Fortschritt\n\n"
        }
        CompanySize::Medium => {
            "**Für Ihr Unternehmen empfehlen wir:**\n\
             • Aufbau einer dedizierten AI-Taskforce\n\
             • Pilotprojekte in verschiedenen Abteilungen\n\
             • Systematisches Change Management einführen\n\n"
        }
        CompanySize::Large => {
            "**Für Ihr Unternehmen empfehlen wir:**\n\
             • Eigenes AI Center of Excellence etablieren\n\
             • Unternehmensweite AI-Governance implementieren\n\
             • Skalierbare AI-Infrastruktur aufbauen\n\n"
        }
        CompanySize::Enterprise => {
            "**Für Ihr Unternehmen empfehlen wir:**\n\
             • AI als strategischen Wettbewerbsvorteil positionieren\n\
             • Eigene AI-Forschung und -Entwicklung\n\
             • Thought Leadership in der Branche übernehmen\n\n"
        }
    }
}
