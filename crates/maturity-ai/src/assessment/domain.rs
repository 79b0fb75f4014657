use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Ordered maturity ranks, lowest to highest. The ordering is load-bearing:
/// delta computation and feasibility checks compare rank positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaturityLevel {
    Resister,
    Explorer,
    Player,
    Transformer,
    Disrupter,
}

impl MaturityLevel {
    pub const ORDERED: [MaturityLevel; 5] = [
        MaturityLevel::Resister,
        MaturityLevel::Explorer,
        MaturityLevel::Player,
        MaturityLevel::Transformer,
        MaturityLevel::Disrupter,
    ];

    /// Zero-based position within the ordered enumeration.
    pub fn rank(self) -> usize {
        match self {
            MaturityLevel::Resister => 0,
            MaturityLevel::Explorer => 1,
            MaturityLevel::Player => 2,
            MaturityLevel::Transformer => 3,
            MaturityLevel::Disrupter => 4,
        }
    }

    /// One-based rank used when comparing against required-maturity tiers.
    pub fn numeric(self) -> u8 {
        self.rank() as u8 + 1
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            MaturityLevel::Resister => "Digital AI Resister",
            MaturityLevel::Explorer => "Digital AI Explorer",
            MaturityLevel::Player => "Digital AI Player",
            MaturityLevel::Transformer => "Digital AI Transformer",
            MaturityLevel::Disrupter => "Digital AI Disrupter",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ORDERED
            .into_iter()
            .find(|level| level.display_name() == name.trim())
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for MaturityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for MaturityLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MaturityLevel::from_display_name(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown maturity level '{raw}'")))
    }
}

/// Employee-count buckets, smallest to largest. Serialized with the exact
/// labels the questionnaire presents, so stored assessments stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompanySize {
    Micro,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub const ORDERED: [CompanySize; 5] = [
        CompanySize::Micro,
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
        CompanySize::Enterprise,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CompanySize::Micro => "Kleinstunternehmen (1-9 Mitarbeiter)",
            CompanySize::Small => "Kleinunternehmen (10-49 Mitarbeiter)",
            CompanySize::Medium => "Mittleres Unternehmen (50-249 Mitarbeiter)",
            CompanySize::Large => "Großunternehmen (250-999 Mitarbeiter)",
            CompanySize::Enterprise => "Konzern (1000+ Mitarbeiter)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ORDERED
            .into_iter()
            .find(|size| size.label() == label.trim())
    }

    /// Micro and small companies get extra hand-holding in next steps.
    pub fn is_small_business(self) -> bool {
        matches!(self, CompanySize::Micro | CompanySize::Small)
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CompanySize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CompanySize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CompanySize::from_label(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown company size '{raw}'")))
    }
}

/// Identifier into the industry catalog (e.g. `banking-finance`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndustryId(pub String);

impl IndustryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndustryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable questionnaire entry. A high score on the statement evidences
/// the associated level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u16,
    pub level: MaturityLevel,
    pub statement: String,
}

/// Likert answer to a single question, score 1 ("does not apply at all")
/// to the configured maximum ("fully applies").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u16,
    pub score: u8,
}

/// Company demographics captured once per assessment session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub industry: IndustryId,
    pub company_size: CompanySize,
}

/// Signed rank difference between computed and self-reported level.
/// Held as an integer internally; the `"+n"` / `"0"` / `"-n"` string form
/// exists only at the serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta(pub i32);

impl Delta {
    pub fn between(calculated: MaturityLevel, self_assessment: MaturityLevel) -> Self {
        Delta(calculated.rank() as i32 - self_assessment.rank() as i32)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Delta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Delta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        let parsed = match trimmed.strip_prefix('+') {
            // An explicit plus is only valid in front of bare positive digits.
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => {
                rest.parse::<i32>().ok().filter(|value| *value > 0)
            }
            Some(_) => None,
            None => trimmed.parse::<i32>().ok(),
        };
        parsed
            .map(Delta)
            .ok_or_else(|| de::Error::custom(format!("invalid delta '{raw}'")))
    }
}

/// Value object produced once per completed assessment and never mutated;
/// downstream enrichment composes new views around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub company_info: CompanyInfo,
    pub self_assessment: MaturityLevel,
    pub calculated_level: MaturityLevel,
    pub score: u32,
    pub level_description: String,
    pub delta: Delta,
    pub insight: String,
    pub next_steps: String,
}
