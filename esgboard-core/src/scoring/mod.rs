//! Scoring utilities shared by connectors, the orchestrator, and the CLI.
//!
//! Modules include:
//! - `pillar`: pillar mean, grade ladder, and whole-table scoring
//! - `rank`: descending ordinal ranking
//! - `text`: keyword pillar classification and naive title sentiment
//! - `news`: tone normalization and the blended article score
/// Pillar aggregation, grading, and table scoring.
pub mod pillar;
/// Rank assignment over overall scores.
pub mod rank;
/// Keyword-based text classification.
pub mod text;
/// Tone normalization and article scoring.
pub mod news;

pub use news::{blended_score, normalize_tone, round2, score_article};
pub use pillar::{grade, overall, score_records, score_sourced};
pub use rank::rank;
pub use text::{classify_esg, heuristic_sentiment};
