//! esgboard orchestrates ESG score lookups across multiple providers.
//!
//! Overview
//! - Routes requests to connectors that implement the `esgboard_core` contracts.
//! - Applies global and per-company priorities to order providers.
//! - Scores tables and leaderboards (overall mean, rank, grade) and news
//!   articles (tone or headline heuristic blended with ESG keyword coverage).
//! - Reports non-fatal problems as `warnings` next to the result.
//!
//! Key behaviors
//! - Fetch strategy:
//!   - `PriorityWithFallback`: deterministic order, per-provider timeout,
//!     aggregated errors.
//!   - `Latency`: races eligible providers; first success wins.
//! - Missing data: a company whose lookup fails is skipped with a warning, or
//!   replaced by a randomized placeholder (uniform integers, default 50–90).
//! - Caching: optional per-connector result cache, cleared with
//!   [`EsgBoard::clear_cache`].
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use esgboard::{EsgBoard, FetchStrategy};
//!
//! let board = EsgBoard::builder()
//!     .with_connector(Arc::new(esgboard_file::CsvConnector::from_path("scores.csv")?))
//!     .with_connector(Arc::new(esgboard_mock::MockConnector::new()))
//!     .fetch_strategy(FetchStrategy::PriorityWithFallback)
//!     .build()?;
//!
//! let scores = board.sustainability("Apple").await?;
//! let report = board.leaderboard(&["AAPL".into(), "TSLA".into()]).await?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{EsgBoard, EsgBoardBuilder, tag_err};
pub use router::leaderboard::placeholder_scores;
pub use router::table::score_table;
pub use router::util::{collapse_errors, join_with_deadline};

pub use esgboard_middleware::{CacheHandle, CacheMiddleware, ConnectorBuilder};

// Re-export core types for convenience
pub use esgboard_core::{
    CacheConfig, Capability, EsgConfig, EsgConnector, EsgError, EsgRecord, FetchStrategy, Grade,
    MissingDataPolicy, NewsArticle, NewsReport, NewsRequest, PillarScores, PlaceholderRange,
    ScoreReport, ScoreSource, ScoredArticle, ScoredCompany, SentimentMode,
};
