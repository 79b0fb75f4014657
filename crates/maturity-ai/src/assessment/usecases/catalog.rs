//! Reference use-case catalog, grouped by industry with a generic `other`
//! bucket that backs the fallback path for industries without entries.

use super::{Complexity, CostRange, RequiredMaturity, RoiEstimate, UseCase, UseCaseCategory};
use crate::assessment::domain::IndustryId;

fn cost(min: u32, max: u32) -> CostRange {
    CostRange {
        min,
        max,
        currency: "CHF".to_string(),
    }
}

fn roi(timeframe: &str, percentage: u32, description: &str) -> RoiEstimate {
    RoiEstimate {
        timeframe: timeframe.to_string(),
        percentage,
        description: description.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn reference_use_cases() -> Vec<UseCase> {
    vec![
        UseCase {
            id: "banking-fraud-detection".to_string(),
            title: "Betrugserkennung in Echtzeit".to_string(),
            description: "KI-basierte Analyse von Transaktionsmustern zur sofortigen Erkennung \
                          verdächtiger Aktivitäten.".to_string(),
            industry: IndustryId::new("banking-finance"),
            category: UseCaseCategory::Analytics,
            complexity: Complexity::Medium,
            time_to_implement: "3-6 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Intermediate,
            estimated_cost: cost(50_000, 200_000),
            estimated_roi: roi("12 Monate", 300, "Reduzierung von Betrugsschäden um 70-80%"),
            prerequisites: strings(&[
                "Historische Transaktionsdaten",
                "API-Integration zu Kernsystemen",
                "Compliance-Freigabe für ML-Modelle",
            ]),
            benefits: strings(&[
                "Drastische Reduzierung von Betrugsschäden",
                "Verbesserte Kundenerfahrung durch weniger False Positives",
                "Automatisierte 24/7 Überwachung",
            ]),
            risks: strings(&[
                "Datenschutz und Compliance Herausforderungen",
                "Initial hohe False-Positive Rate",
            ]),
            technologies: strings(&["Machine Learning", "Real-time Analytics"]),
            next_steps: strings(&[
                "Datenaudit durchführen",
                "POC mit historischen Daten starten",
                "Compliance-Team einbeziehen",
            ]),
        },
        UseCase {
            id: "banking-chatbot".to_string(),
            title: "Intelligenter Kundenservice-Chatbot".to_string(),
            description: "AI-Chatbot für 24/7 Kundenbetreuung mit Verständnis für \
                          Finanzprodukte.".to_string(),
            industry: IndustryId::new("banking-finance"),
            category: UseCaseCategory::CustomerExperience,
            complexity: Complexity::Low,
            time_to_implement: "6-12 Wochen".to_string(),
            required_maturity_level: RequiredMaturity::Beginner,
            estimated_cost: cost(15_000, 50_000),
            estimated_roi: roi("6 Monate", 200, "Reduzierung der Service-Kosten um 40%"),
            prerequisites: strings(&["FAQ-Datenbank", "Website/App Integration"]),
            benefits: strings(&[
                "24/7 Verfügbarkeit",
                "Sofortige Antworten auf Standardfragen",
                "Entlastung des Support-Teams",
            ]),
            risks: strings(&[
                "Mögliche Fehlinterpretationen",
                "Kundenfrustration bei komplexen Anfragen",
            ]),
            technologies: strings(&["NLP", "Chatbot Framework"]),
            next_steps: strings(&[
                "FAQ-Analyse durchführen",
                "Chatbot-Plattform evaluieren",
                "Pilot mit kleiner Nutzergruppe",
            ]),
        },
        UseCase {
            id: "it-code-review".to_string(),
            title: "Automatisierte Code-Review und Qualitätssicherung".to_string(),
            description: "KI-gestützte Code-Analyse für Bugs, Security Issues und Best \
                          Practices.".to_string(),
            industry: IndustryId::new("it-software"),
            category: UseCaseCategory::Automation,
            complexity: Complexity::Medium,
            time_to_implement: "6-12 Wochen".to_string(),
            required_maturity_level: RequiredMaturity::Intermediate,
            estimated_cost: cost(20_000, 80_000),
            estimated_roi: roi(
                "12 Monate",
                250,
                "Reduzierung von Bugs um 60%, 30% weniger Review-Zeit",
            ),
            prerequisites: strings(&[
                "Git Repository Zugang",
                "CI/CD Pipeline vorhanden",
                "Development Team Buy-in",
            ]),
            benefits: strings(&[
                "Frühe Erkennung von Sicherheitslücken",
                "Konsistente Code-Qualität",
            ]),
            risks: strings(&["False Positives bei Regeln", "Widerstand von Entwicklern"]),
            technologies: strings(&["Static Code Analysis", "ML Models"]),
            next_steps: strings(&[
                "Code-Audit durchführen",
                "Tool-Evaluation durchführen",
                "Pilot-Integration in einem Projekt",
            ]),
        },
        UseCase {
            id: "healthcare-triage-assistant".to_string(),
            title: "KI-gestützte Patienten-Triage".to_string(),
            description: "Automatisierte Vorqualifizierung von Patientenanfragen zur \
                          Entlastung des medizinischen Personals.".to_string(),
            industry: IndustryId::new("healthcare"),
            category: UseCaseCategory::Operations,
            complexity: Complexity::High,
            time_to_implement: "6-12 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Advanced,
            estimated_cost: cost(150_000, 500_000),
            estimated_roi: roi("24 Monate", 180, "Schnellere Versorgung, weniger Wartezeiten"),
            prerequisites: strings(&[
                "Strukturierte Patientendaten",
                "Medizinische Compliance-Freigabe",
                "Interoperabilität mit Kernsystemen",
            ]),
            benefits: strings(&[
                "Entlastung des Fachpersonals",
                "Konsistente Erstbewertung",
            ]),
            risks: strings(&[
                "Haftungs- und Zulassungsfragen",
                "Hohe Anforderungen an Datenqualität",
            ]),
            technologies: strings(&["NLP", "Clinical Decision Support"]),
            next_steps: strings(&[
                "Regulatorische Anforderungen klären",
                "Datenbasis auditieren",
                "Pilot mit einer Fachabteilung",
            ]),
        },
        UseCase {
            id: "production-predictive-maintenance".to_string(),
            title: "Predictive Maintenance".to_string(),
            description: "Vorausschauende Wartung von Maschinen auf Basis von Sensordaten und \
                          Ausfallhistorie.".to_string(),
            industry: IndustryId::new("production"),
            category: UseCaseCategory::Operations,
            complexity: Complexity::Medium,
            time_to_implement: "2-4 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Intermediate,
            estimated_cost: cost(40_000, 150_000),
            estimated_roi: roi("12 Monate", 220, "Reduzierung ungeplanter Stillstände um 50%"),
            prerequisites: strings(&[
                "Sensordaten der Anlagen",
                "Wartungshistorie",
            ]),
            benefits: strings(&[
                "Weniger ungeplante Ausfälle",
                "Optimierte Ersatzteilhaltung",
            ]),
            risks: strings(&["Nachrüstkosten für Sensorik", "Datenqualität der Historie"]),
            technologies: strings(&["IoT", "Time-Series Analytics"]),
            next_steps: strings(&[
                "Kritische Anlagen identifizieren",
                "Datenerfassung aufsetzen",
                "Pilotlinie auswählen",
            ]),
        },
        UseCase {
            id: "retail-demand-forecasting".to_string(),
            title: "Demand Forecasting und Personalisierung".to_string(),
            description: "Nachfrageprognosen und personalisierte Empfehlungen auf Basis von \
                          Kauf- und Saisondaten.".to_string(),
            industry: IndustryId::new("retail"),
            category: UseCaseCategory::Analytics,
            complexity: Complexity::Medium,
            time_to_implement: "2-4 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Intermediate,
            estimated_cost: cost(30_000, 120_000),
            estimated_roi: roi("12 Monate", 170, "Weniger Überbestände, höhere Conversion"),
            prerequisites: strings(&["Historische Verkaufsdaten", "Warenwirtschaftssystem"]),
            benefits: strings(&[
                "Bessere Bestandsplanung",
                "Relevantere Kundenansprache",
            ]),
            risks: strings(&["Saisonale Ausreißer", "Datensilos zwischen Kanälen"]),
            technologies: strings(&["Forecasting Models", "Recommendation Engine"]),
            next_steps: strings(&[
                "Datenquellen konsolidieren",
                "Prognosegüte-Baseline messen",
                "Pilotsortiment definieren",
            ]),
        },
        UseCase {
            id: "consulting-knowledge-management".to_string(),
            title: "AI-gestützte Wissensdatenbank".to_string(),
            description: "Intelligente Suche und Empfehlungen für interne Dokumente und Best \
                          Practices.".to_string(),
            industry: IndustryId::new("consulting"),
            category: UseCaseCategory::Analytics,
            complexity: Complexity::Medium,
            time_to_implement: "2-4 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Intermediate,
            estimated_cost: cost(30_000, 120_000),
            estimated_roi: roi("12 Monate", 180, "Reduzierung der Recherche-Zeit um 60%"),
            prerequisites: strings(&["Dokumenten-Repository", "Strukturierte Wissensbasis"]),
            benefits: strings(&[
                "Schnellere Projektbearbeitung",
                "Bessere Wissensverteilung im Team",
            ]),
            risks: strings(&["Datenqualität entscheidend", "Akzeptanz bei Beratern"]),
            technologies: strings(&["NLP", "Vector Search"]),
            next_steps: strings(&[
                "Dokumenten-Audit durchführen",
                "Pilotprojekt mit einem Bereich",
                "User Training planen",
            ]),
        },
        UseCase {
            id: "education-adaptive-learning".to_string(),
            title: "Adaptive Lernplattform".to_string(),
            description: "Personalisierte Lernpfade basierend auf individuellem Fortschritt \
                          und Lerntyp.".to_string(),
            industry: IndustryId::new("education"),
            category: UseCaseCategory::CustomerExperience,
            complexity: Complexity::High,
            time_to_implement: "6-12 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Advanced,
            estimated_cost: cost(80_000, 300_000),
            estimated_roi: roi("18 Monate", 150, "Verbesserung der Lernerfolge um 40%"),
            prerequisites: strings(&[
                "Learning Management System",
                "Lernfortschritt-Daten",
            ]),
            benefits: strings(&["Individualisierte Lernwege", "Höhere Erfolgsquoten"]),
            risks: strings(&["Komplexe Implementierung", "Datenschutz-Anforderungen"]),
            technologies: strings(&["Machine Learning", "Learning Analytics"]),
            next_steps: strings(&[
                "Pädagogisches Framework definieren",
                "Datenstrategie entwickeln",
                "Pilotprogramm mit kleiner Gruppe",
            ]),
        },
        UseCase {
            id: "energy-smart-grid-optimization".to_string(),
            title: "Smart Grid Energieoptimierung".to_string(),
            description: "KI-basierte Vorhersage und Optimierung von Energieverbrauch und \
                          -erzeugung.".to_string(),
            industry: IndustryId::new("energy"),
            category: UseCaseCategory::Operations,
            complexity: Complexity::High,
            time_to_implement: "8-18 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Advanced,
            estimated_cost: cost(200_000, 800_000),
            estimated_roi: roi("24 Monate", 200, "Energieeffizienz-Steigerung um 25%"),
            prerequisites: strings(&[
                "Smart Meter Infrastruktur",
                "Historische Verbrauchsdaten",
            ]),
            benefits: strings(&["Optimierte Energieverteilung", "Reduzierte Ausfallzeiten"]),
            risks: strings(&["Regulatorische Anforderungen", "Kritische Infrastruktur"]),
            technologies: strings(&["IoT", "Predictive Analytics"]),
            next_steps: strings(&[
                "Infrastruktur-Assessment",
                "Regulatorische Klärung",
                "Machbarkeitsstudie",
            ]),
        },
        UseCase {
            id: "insurance-claims-automation".to_string(),
            title: "Automatisierte Schadenbearbeitung".to_string(),
            description: "KI-gestützte Prüfung und Bearbeitung von \
                          Versicherungsschäden.".to_string(),
            industry: IndustryId::new("insurance"),
            category: UseCaseCategory::Automation,
            complexity: Complexity::Medium,
            time_to_implement: "4-8 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Intermediate,
            estimated_cost: cost(60_000, 250_000),
            estimated_roi: roi("12 Monate", 300, "Bearbeitungszeit um 70% reduziert"),
            prerequisites: strings(&[
                "Digitale Schadensmeldungen",
                "Historische Schadensdaten",
            ]),
            benefits: strings(&["Schnellere Schadenbearbeitung", "Konsistente Bewertungen"]),
            risks: strings(&[
                "Komplexe Fälle benötigen manuellen Review",
                "Regulatorische Compliance",
            ]),
            technologies: strings(&["Document Processing", "Computer Vision"]),
            next_steps: strings(&[
                "Schadentypen analysieren",
                "Automatisierungsgrad definieren",
                "Pilot mit einfachen Schäden",
            ]),
        },
        UseCase {
            id: "media-content-personalization".to_string(),
            title: "Personalisierte Content-Empfehlungen".to_string(),
            description: "KI-basierte Personalisierung von Inhalten für bessere User \
                          Experience.".to_string(),
            industry: IndustryId::new("media"),
            category: UseCaseCategory::CustomerExperience,
            complexity: Complexity::Medium,
            time_to_implement: "3-6 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Intermediate,
            estimated_cost: cost(40_000, 150_000),
            estimated_roi: roi("9 Monate", 250, "User Engagement um 45% gesteigert"),
            prerequisites: strings(&["User Tracking System", "Content Management System"]),
            benefits: strings(&["Längere Verweildauer", "Bessere Monetarisierung"]),
            risks: strings(&["Datenschutz-Anforderungen", "Filter-Bubble-Effekte"]),
            technologies: strings(&["Recommendation Systems", "Collaborative Filtering"]),
            next_steps: strings(&[
                "User Journey analysieren",
                "A/B-Testing-Framework aufsetzen",
                "Content-Tagging optimieren",
            ]),
        },
        UseCase {
            id: "public-citizen-service-bot".to_string(),
            title: "Bürgerservice-Chatbot".to_string(),
            description: "Intelligenter Chatbot für häufige Bürgeranfragen und \
                          Formularhilfe.".to_string(),
            industry: IndustryId::new("public"),
            category: UseCaseCategory::CustomerExperience,
            complexity: Complexity::Low,
            time_to_implement: "3-6 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Beginner,
            estimated_cost: cost(25_000, 80_000),
            estimated_roi: roi("12 Monate", 180, "Entlastung der Hotline um 50%"),
            prerequisites: strings(&["FAQ-Katalog", "Website-Integration"]),
            benefits: strings(&["24/7 Verfügbarkeit", "Entlastung der Mitarbeiter"]),
            risks: strings(&[
                "Komplexe Anfragen überfordern den Bot",
                "Mehrsprachigkeit herausfordernd",
            ]),
            technologies: strings(&["NLP", "Chatbot Platform"]),
            next_steps: strings(&[
                "Häufige Anfragen analysieren",
                "Mehrsprachiges Framework wählen",
                "Pilotprojekt mit einer Abteilung",
            ]),
        },
        UseCase {
            id: "tourism-demand-forecasting".to_string(),
            title: "Tourismus-Nachfrage Vorhersage".to_string(),
            description: "KI-gestützte Vorhersage von Buchungsverhalten und \
                          Nachfrage-Peaks.".to_string(),
            industry: IndustryId::new("tourism"),
            category: UseCaseCategory::Analytics,
            complexity: Complexity::Medium,
            time_to_implement: "4-8 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Intermediate,
            estimated_cost: cost(45_000, 180_000),
            estimated_roi: roi("12 Monate", 220, "Optimierte Auslastung und Preisgestaltung"),
            prerequisites: strings(&[
                "Historische Buchungsdaten",
                "Externe Datenquellen (Wetter, Events)",
            ]),
            benefits: strings(&["Bessere Kapazitätsplanung", "Optimierte Preisgestaltung"]),
            risks: strings(&[
                "Saisonale Schwankungen",
                "Externe Faktoren schwer vorhersagbar",
            ]),
            technologies: strings(&["Time Series Forecasting", "Demand Modeling"]),
            next_steps: strings(&[
                "Datenquellen identifizieren",
                "Forecast-Modell entwickeln",
                "Integration ins Buchungssystem",
            ]),
        },
        UseCase {
            id: "other-process-automation".to_string(),
            title: "Prozessautomatisierung".to_string(),
            description: "Automatisierung wiederkehrender Geschäftsprozesse zur \
                          Effizienzsteigerung.".to_string(),
            industry: IndustryId::new("other"),
            category: UseCaseCategory::Automation,
            complexity: Complexity::Low,
            time_to_implement: "2-4 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Beginner,
            estimated_cost: cost(20_000, 80_000),
            estimated_roi: roi("12 Monate", 200, "Zeitersparnis und Kostenreduktion"),
            prerequisites: strings(&["Dokumentierte Prozesse", "Management Buy-in"]),
            benefits: strings(&["Effizienzsteigerung", "Kosteneinsparung", "Weniger Fehler"]),
            risks: strings(&["Change Management", "Wartungsaufwand"]),
            technologies: strings(&["RPA", "Workflow Automation"]),
            next_steps: strings(&["Prozessanalyse", "Tool-Auswahl", "Pilotprojekt", "Rollout"]),
        },
        UseCase {
            id: "other-document-intelligence".to_string(),
            title: "Intelligente Dokumentenverarbeitung".to_string(),
            description: "Automatische Extraktion und Klassifikation von Informationen aus \
                          Rechnungen, Verträgen und Formularen.".to_string(),
            industry: IndustryId::new("other"),
            category: UseCaseCategory::Automation,
            complexity: Complexity::Low,
            time_to_implement: "6-12 Wochen".to_string(),
            required_maturity_level: RequiredMaturity::Beginner,
            estimated_cost: cost(15_000, 60_000),
            estimated_roi: roi("6 Monate", 210, "Bis zu 70% weniger manuelle Erfassung"),
            prerequisites: strings(&["Digitalisierte Dokumente", "Definierte Ablageprozesse"]),
            benefits: strings(&["Schnellere Durchlaufzeiten", "Weniger Erfassungsfehler"]),
            risks: strings(&["Sonderformate", "Qualität der Scans"]),
            technologies: strings(&["OCR", "Document AI"]),
            next_steps: strings(&[
                "Dokumenttypen priorisieren",
                "Extraktionsqualität testen",
                "Integration in Ablagesystem",
            ]),
        },
        UseCase {
            id: "logistics-route-optimization".to_string(),
            title: "Dynamische Routenoptimierung".to_string(),
            description: "KI-optimierte Tourenplanung unter Berücksichtigung von Verkehr, \
                          Zeitfenstern und Auslastung.".to_string(),
            industry: IndustryId::new("logistics"),
            category: UseCaseCategory::Operations,
            complexity: Complexity::Medium,
            time_to_implement: "3-6 Monate".to_string(),
            required_maturity_level: RequiredMaturity::Intermediate,
            estimated_cost: cost(50_000, 180_000),
            estimated_roi: roi("12 Monate", 160, "10-15% geringere Fahrtkosten"),
            prerequisites: strings(&["Telematikdaten", "Auftragsdaten in Echtzeit"]),
            benefits: strings(&["Geringerer Kraftstoffverbrauch", "Höhere Termintreue"]),
            risks: strings(&["Akzeptanz der Fahrer", "Datenintegration"]),
            technologies: strings(&["Optimization Engine", "Telematics"]),
            next_steps: strings(&[
                "Ist-Touren analysieren",
                "Optimierungspotential quantifizieren",
                "Pilotregion festlegen",
            ]),
        },
    ]
}
