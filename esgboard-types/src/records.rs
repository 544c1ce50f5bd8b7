//! Company-level ESG records and their scored form.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EsgError;

/// Raw pillar scores as delivered by a table or provider (0–100 each).
///
/// Any pillar may be absent; callers decide whether to fill or skip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PillarScores {
    /// Environmental pillar.
    pub environmental: Option<f64>,
    /// Social pillar.
    pub social: Option<f64>,
    /// Governance pillar.
    pub governance: Option<f64>,
}

impl PillarScores {
    /// All three pillars present.
    #[must_use]
    pub const fn new(environmental: f64, social: f64, governance: f64) -> Self {
        Self {
            environmental: Some(environmental),
            social: Some(social),
            governance: Some(governance),
        }
    }

    /// `[environmental, social, governance]` when every pillar is present.
    #[must_use]
    pub fn complete(&self) -> Option<[f64; 3]> {
        Some([self.environmental?, self.social?, self.governance?])
    }

    /// `[environmental, social, governance]` with absent pillars as zero.
    #[must_use]
    pub fn filled(&self) -> [f64; 3] {
        [
            self.environmental.unwrap_or(0.0),
            self.social.unwrap_or(0.0),
            self.governance.unwrap_or(0.0),
        ]
    }

    /// Labels of the pillars that are absent.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.environmental.is_none() {
            out.push("environmental");
        }
        if self.social.is_none() {
            out.push("social");
        }
        if self.governance.is_none() {
            out.push("governance");
        }
        out
    }
}

/// One input row: a company and its pillar scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgRecord {
    /// Display name, also the drill-down key.
    pub company: String,
    /// Pillar scores for the company.
    pub scores: PillarScores,
}

impl EsgRecord {
    /// Build a record from a company name and scores.
    pub fn new(company: impl Into<String>, scores: PillarScores) -> Self {
        Self {
            company: company.into(),
            scores,
        }
    }
}

/// Letter grade bucket derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// Overall score of 85 or more.
    #[serde(rename = "AAA")]
    Aaa,
    /// Overall score of 75 or more.
    #[serde(rename = "AA")]
    Aa,
    /// Overall score of 65 or more.
    #[serde(rename = "A")]
    A,
    /// Anything below 65.
    #[serde(rename = "BBB")]
    Bbb,
}

impl Grade {
    /// Rating label as displayed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Bbb => "BBB",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = EsgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AAA" => Ok(Self::Aaa),
            "AA" => Ok(Self::Aa),
            "A" => Ok(Self::A),
            "BBB" => Ok(Self::Bbb),
            other => Err(EsgError::InvalidArg(format!("unknown grade: {other}"))),
        }
    }
}

/// Where a scored company's pillar values came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreSource {
    /// Loaded from a table (CSV or embedded sample).
    Table,
    /// Fetched from the named connector.
    Provider(String),
    /// Randomized stand-in after a failed fetch.
    Placeholder,
}

/// A company with its derived overall score, rank, and grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCompany {
    /// Display name.
    pub company: String,
    /// Environmental pillar used in the computation.
    pub environmental: f64,
    /// Social pillar used in the computation.
    pub social: f64,
    /// Governance pillar used in the computation.
    pub governance: f64,
    /// Mean of the three pillars.
    pub overall_score: f64,
    /// 1-based position in descending order of `overall_score`.
    pub rank: usize,
    /// Grade bucket for `overall_score`.
    pub grade: Grade,
    /// Origin of the pillar values.
    pub source: ScoreSource,
    /// Zero-based position of the source record in the scored input.
    #[serde(default)]
    pub row: usize,
}
