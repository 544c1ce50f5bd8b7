use std::fs;
use std::path::Path;

use async_trait::async_trait;
use esgboard_core::connector::{EsgConnector, NewsProvider};
use esgboard_core::{EsgError, NewsArticle, NewsRequest};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum ArchiveShape {
    Bare(Vec<NewsArticle>),
    Wrapped {
        #[serde(default)]
        articles: Vec<NewsArticle>,
    },
}

/// Serves articles from a saved news-search response.
pub struct NewsArchiveConnector {
    articles: Vec<NewsArticle>,
}

impl NewsArchiveConnector {
    /// Connector name used for routing and error tagging.
    pub const NAME: &'static str = "esgboard-news-archive";

    /// Build from articles already in memory.
    #[must_use]
    pub const fn from_articles(articles: Vec<NewsArticle>) -> Self {
        Self { articles }
    }

    /// Parse a JSON archive: either an array of articles or `{"articles": [...]}`.
    ///
    /// # Errors
    /// Returns `Data` when the text matches neither shape.
    pub fn from_json(text: &str) -> Result<Self, EsgError> {
        let shape: ArchiveShape = serde_json::from_str(text)
            .map_err(|e| EsgError::Data(format!("news archive: {e}")))?;
        let articles = match shape {
            ArchiveShape::Bare(a) | ArchiveShape::Wrapped { articles: a } => a,
        };
        Ok(Self::from_articles(articles))
    }

    /// Load a JSON archive from disk.
    ///
    /// # Errors
    /// `Io` when the file cannot be read; otherwise see [`Self::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EsgError> {
        let text = fs::read_to_string(path.as_ref())
            .map_err(|e| EsgError::Io(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_json(&text)
    }

    /// Number of archived articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// True when the archive holds no articles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[async_trait]
impl EsgConnector for NewsArchiveConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Archive"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl NewsProvider for NewsArchiveConnector {
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsArticle>, EsgError> {
        let needle = req.query().to_lowercase();
        let limit = usize::try_from(req.limit()).unwrap_or(usize::MAX);
        Ok(self
            .articles
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect())
    }
}
