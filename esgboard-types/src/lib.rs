//! Esgboard-specific data transfer objects, configuration, and error types.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod middleware;
mod news;
mod records;
mod reports;

pub use capability::Capability;
pub use config::{
    CacheConfig, EsgConfig, FetchStrategy, MissingDataPolicy, PlaceholderRange, SentimentMode,
};
pub use connector::ConnectorKey;
pub use error::EsgError;
pub use middleware::{MiddlewareLayer, MiddlewareStack};
pub use news::{NewsArticle, NewsRequest, ScoredArticle, parse_article_date};
pub use records::{EsgRecord, Grade, PillarScores, ScoreSource, ScoredCompany};
pub use reports::{NewsReport, ScoreReport};
