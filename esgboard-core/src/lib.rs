//! esgboard-core
//!
//! Core types, traits, and utilities shared across the esgboard ecosystem.
//!
//! - `types`: re-exported records, reports, configuration, and errors.
//! - `connector`: the `EsgConnector` trait and capability provider traits.
//! - `scoring`: pillar aggregation, grading, ranking, and news scoring.
//! - `table`: reading score tables from CSV and writing the augmented CSV.
//! - `input`: parsing of user-supplied ticker lists and company names.
#![warn(missing_docs)]

/// Connector capability traits and the primary `EsgConnector` interface.
pub mod connector;
/// User input normalization.
pub mod input;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Scoring primitives and whole-table scoring.
pub mod scoring;
/// CSV score table I/O.
pub mod table;
pub mod types;

pub use connector::EsgConnector;
pub use input::{normalize_company, parse_ticker_list};
pub use middleware::Middleware;
pub use scoring::{
    blended_score, classify_esg, grade, heuristic_sentiment, normalize_tone, overall, rank,
    score_article, score_records, score_sourced,
};
pub use table::{ScoreTable, TableRow, write_scores};
pub use types::*;
