#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use esgboard_core::connector::{EsgConnector, EsgProvider, NewsProvider};
use esgboard_core::{EsgError, NewsArticle, NewsRequest, PillarScores};
use esgboard_mock::MockConnector;

/// Counts calls reaching the wrapped mock.
pub struct CountingConnector {
    inner: Arc<dyn EsgConnector>,
    esg: Arc<AtomicUsize>,
    news: Arc<AtomicUsize>,
}

impl CountingConnector {
    pub fn new() -> (Arc<dyn EsgConnector>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let esg = Arc::new(AtomicUsize::new(0));
        let news = Arc::new(AtomicUsize::new(0));
        let me = Self {
            inner: Arc::new(MockConnector::new()),
            esg: Arc::clone(&esg),
            news: Arc::clone(&news),
        };
        (Arc::new(me), esg, news)
    }
}

pub fn count(c: &AtomicUsize) -> usize {
    c.load(Ordering::SeqCst)
}

#[async_trait::async_trait]
impl EsgConnector for CountingConnector {
    fn name(&self) -> &'static str {
        "counting"
    }
    fn vendor(&self) -> &'static str {
        "test"
    }
    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        Some(self as &dyn EsgProvider)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait::async_trait]
impl EsgProvider for CountingConnector {
    async fn sustainability(&self, company: &str) -> Result<PillarScores, EsgError> {
        self.esg.fetch_add(1, Ordering::SeqCst);
        self.inner
            .as_esg_provider()
            .unwrap()
            .sustainability(company)
            .await
    }
}

#[async_trait::async_trait]
impl NewsProvider for CountingConnector {
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsArticle>, EsgError> {
        self.news.fetch_add(1, Ordering::SeqCst);
        self.inner.as_news_provider().unwrap().news(req).await
    }
}
