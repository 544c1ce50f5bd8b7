use std::collections::HashSet;

use esgboard_core::{
    Capability, EsgError, NewsArticle, NewsReport, NewsRequest, SentimentMode, score_article,
};

use crate::EsgBoard;
use crate::esgboard_router_method;

impl EsgBoard {
    esgboard_router_method! {
        /// Fetch news articles matching a query.
        ///
        /// Providers may return syndicated duplicates; `news_report` removes them.
        method: news(req: &NewsRequest) -> Vec<NewsArticle>,
        accessor: as_news_provider,
        capability: Capability::News,
        not_found: "news",
        route_key: req.query(),
        call: news
    }

    /// Fetch and score news for `req`.
    ///
    /// Articles are de-duplicated by URL (first wins) and scored with the
    /// configured sentiment mode. In tone mode, an article without a tone is
    /// scored as neutral and reported in `warnings`.
    ///
    /// # Errors
    /// Routing errors from [`news`](Self::news); `NotFound` when no article matched.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "esgboard::router", skip(self, req), fields(query = %req.query()))
    )]
    pub async fn news_report(&self, req: &NewsRequest) -> Result<NewsReport, EsgError> {
        let fetched = self.news(req).await?;
        let mode = self.cfg.sentiment;

        let mut seen = HashSet::new();
        let mut warnings = Vec::new();
        let articles: Vec<_> = fetched
            .into_iter()
            .filter(|a| seen.insert(a.url.clone()))
            .map(|a| {
                if mode == SentimentMode::Tone && a.tone.is_none() {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(url = %a.url, "article has no tone; scoring as neutral");
                    warnings.push(EsgError::Data(format!("{}: no tone, scored neutral", a.url)));
                }
                score_article(a, mode)
            })
            .collect();

        if articles.is_empty() {
            return Err(EsgError::not_found(format!("news for {}", req.query())));
        }

        Ok(NewsReport {
            query: req.query().to_string(),
            articles,
            warnings,
        })
    }
}
