use async_trait::async_trait;

use crate::EsgError;
pub use esgboard_types::ConnectorKey;
use esgboard_types::{NewsArticle, NewsRequest, PillarScores};

/// Focused role trait for connectors that provide ESG pillar scores.
#[async_trait]
pub trait EsgProvider: Send + Sync {
    /// Fetch environmental, social, and governance scores for a company or ticker.
    ///
    /// Returns `NotFound` when the connector has no data for `company`.
    async fn sustainability(&self, company: &str) -> Result<PillarScores, EsgError>;
}

/// Focused role trait for connectors that provide news articles.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch articles matching the request, at most `req.limit()` of them.
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsArticle>, EsgError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait EsgConnector: Send + Sync {
    /// Stable connector name used for routing preferences and error tagging.
    fn name(&self) -> &'static str;

    /// Typed key for this connector.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-readable vendor or data source label.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// If implemented, returns a trait object for ESG pillar scores.
    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        None
    }

    /// If implemented, returns a trait object for news articles.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
}
