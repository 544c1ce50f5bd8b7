//! Re-export of foundational types from `esgboard-types`.
// Consolidated re-exports so downstream crates can depend on `esgboard-core` only

pub use esgboard_types::{Capability, ConnectorKey, EsgError};

pub use esgboard_types::{
    CacheConfig, EsgConfig, FetchStrategy, MissingDataPolicy, PlaceholderRange, SentimentMode,
};
pub use esgboard_types::{MiddlewareLayer, MiddlewareStack};

pub use esgboard_types::{EsgRecord, Grade, PillarScores, ScoreSource, ScoredCompany};
pub use esgboard_types::{NewsArticle, NewsRequest, ScoredArticle, parse_article_date};
pub use esgboard_types::{NewsReport, ScoreReport};
