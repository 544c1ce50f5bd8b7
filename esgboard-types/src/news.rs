//! News articles, news queries, and scored articles.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::EsgError;

/// Query for news articles about a company or topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsRequest {
    query: String,
    max_records: u32,
}

impl NewsRequest {
    /// Default number of articles requested.
    pub const DEFAULT_MAX_RECORDS: u32 = 20;

    /// Build a request for `query`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the query is blank.
    pub fn new(query: impl Into<String>) -> Result<Self, EsgError> {
        let query = query.into().trim().to_string();
        if query.is_empty() {
            return Err(EsgError::InvalidArg("news query must not be empty".into()));
        }
        Ok(Self {
            query,
            max_records: Self::DEFAULT_MAX_RECORDS,
        })
    }

    /// Cap the number of articles returned (at least one).
    #[must_use]
    pub fn max_records(mut self, n: u32) -> Self {
        self.max_records = n.max(1);
        self
    }

    /// The trimmed query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Maximum number of articles to return.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.max_records
    }
}

/// Article metadata as returned by a news source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Canonical link; the article's identity.
    pub url: String,
    /// Headline.
    pub title: String,
    /// Publication time when the source supplied a recognizable one.
    #[serde(
        default,
        alias = "seendate",
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    /// Publisher or domain.
    #[serde(default, alias = "domain", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Bounded tone signal, nominally in [-10, 10].
    #[serde(
        default,
        alias = "sentiment",
        deserialize_with = "lenient_tone",
        skip_serializing_if = "Option::is_none"
    )]
    pub tone: Option<f64>,
}

/// A news article with its sentiment, pillar count, and blended score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    /// The source article.
    pub article: NewsArticle,
    /// Sentiment in [0, 1].
    pub sentiment: f64,
    /// Number of ESG pillars the title mentions (0–3).
    pub esg_strength: u8,
    /// Blended 0–100 score, two decimals.
    pub score: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
}

fn lenient_tone<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(de).unwrap_or(None);
    Ok(match raw {
        Some(RawScalar::Number(n)) => Some(n),
        Some(RawScalar::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    }
    .filter(|v| v.is_finite()))
}

fn lenient_date<'de, D>(de: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(de).unwrap_or(None);
    Ok(match raw {
        Some(RawScalar::Text(s)) => parse_article_date(&s),
        _ => None,
    })
}

/// Parse the date formats news sources commonly emit.
///
/// Accepts RFC 3339, compact `YYYYMMDDTHHMMSSZ`, and bare `YYYY-MM-DD`.
#[must_use]
pub fn parse_article_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%SZ") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
}
