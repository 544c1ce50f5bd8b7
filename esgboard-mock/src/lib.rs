//! Deterministic connectors for tests and demos.
use std::time::Duration;

use async_trait::async_trait;
use esgboard_core::connector::{EsgConnector, EsgProvider, NewsProvider};
use esgboard_core::{EsgError, EsgRecord, NewsArticle, NewsRequest, PillarScores};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Latency injected for the `TIMEOUT` company or query.
pub const TIMEOUT_DELAY: Duration = Duration::from_millis(200);

/// The embedded demo table: Apple, Microsoft, Tesla, Amazon.
#[must_use]
pub fn sample_records() -> Vec<EsgRecord> {
    fixtures::esg::sample()
}

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name used for routing and error tagging.
    pub const NAME: &'static str = "esgboard-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(key: &str, capability: &'static str) -> Result<(), EsgError> {
        match key.trim() {
            "FAIL" => Err(EsgError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Long enough to trip a short provider timeout in tests.
                tokio::time::sleep(TIMEOUT_DELAY).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl EsgConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        Some(self as &dyn EsgProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl EsgProvider for MockConnector {
    async fn sustainability(&self, company: &str) -> Result<PillarScores, EsgError> {
        Self::maybe_fail_or_timeout(company, "esg").await?;
        fixtures::esg::by_company(company)
            .ok_or_else(|| EsgError::not_found(format!("esg for {}", company.trim())))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsArticle>, EsgError> {
        Self::maybe_fail_or_timeout(req.query(), "news").await?;
        Ok(fixtures::news::search(req))
    }
}
