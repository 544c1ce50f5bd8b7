//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::EsgError;
use crate::news::ScoredArticle;
use crate::records::ScoredCompany;

/// Scored companies plus the non-fatal issues met while building them.
///
/// `companies` keeps input order; use [`ScoreReport::ranked`] for leaderboard
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreReport {
    /// Scored companies in input order.
    pub companies: Vec<ScoredCompany>,
    /// Records that were skipped or substituted, with the reason.
    pub warnings: Vec<EsgError>,
}

impl ScoreReport {
    /// Companies ordered by rank (best first).
    #[must_use]
    pub fn ranked(&self) -> Vec<&ScoredCompany> {
        let mut out: Vec<&ScoredCompany> = self.companies.iter().collect();
        out.sort_by_key(|c| c.rank);
        out
    }

    /// Drill-down lookup by company name, case-insensitive.
    #[must_use]
    pub fn company(&self, name: &str) -> Option<&ScoredCompany> {
        let needle = name.trim();
        self.companies
            .iter()
            .find(|c| c.company.trim().eq_ignore_ascii_case(needle))
    }

    /// The top-ranked company, if any.
    #[must_use]
    pub fn leader(&self) -> Option<&ScoredCompany> {
        self.companies.iter().min_by_key(|c| c.rank)
    }

    /// Mean overall score across all companies.
    #[must_use]
    pub fn average_overall(&self) -> Option<f64> {
        if self.companies.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.companies.len() as f64;
        Some(self.companies.iter().map(|c| c.overall_score).sum::<f64>() / n)
    }
}

/// Scored articles for a news query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NewsReport {
    /// The query that produced these articles.
    pub query: String,
    /// Articles in provider order.
    pub articles: Vec<ScoredArticle>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<EsgError>,
}

impl NewsReport {
    /// Mean blended score across articles, two decimals.
    #[must_use]
    pub fn average_score(&self) -> Option<f64> {
        if self.articles.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.articles.len() as f64;
        let mean = self.articles.iter().map(|a| a.score).sum::<f64>() / n;
        Some((mean * 100.0).round() / 100.0)
    }

    /// Articles ordered by score, highest first; ties keep provider order.
    #[must_use]
    pub fn by_score(&self) -> Vec<&ScoredArticle> {
        let mut out: Vec<&ScoredArticle> = self.articles.iter().collect();
        out.sort_by(|a, b| b.score.total_cmp(&a.score));
        out
    }
}
