use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use esgboard_core::connector::{EsgConnector, EsgProvider, NewsProvider};
use esgboard_core::{EsgError, NewsArticle, NewsRequest, PillarScores, normalize_company};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(EsgError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    esg_rules: HashMap<String, MockBehavior<PillarScores>>,
    news_rules: HashMap<String, MockBehavior<Vec<NewsArticle>>>,
    esg_calls: Vec<String>,
    news_calls: Vec<String>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `sustainability` calls for a company (case-insensitive).
    pub async fn set_esg_behavior(&self, company: &str, behavior: MockBehavior<PillarScores>) {
        let mut guard = self.state.lock().await;
        guard.esg_rules.insert(normalize_company(company), behavior);
    }

    /// Set the behavior for `news` calls for a query (case-insensitive).
    pub async fn set_news_behavior(&self, query: &str, behavior: MockBehavior<Vec<NewsArticle>>) {
        let mut guard = self.state.lock().await;
        guard.news_rules.insert(normalize_company(query), behavior);
    }

    /// Companies passed to `sustainability`, in call order.
    pub async fn esg_calls(&self) -> Vec<String> {
        self.state.lock().await.esg_calls.clone()
    }

    /// Queries passed to `news`, in call order.
    pub async fn news_calls(&self) -> Vec<String> {
        self.state.lock().await.news_calls.clone()
    }

    /// Clear all configured behaviors and call logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.esg_rules.clear();
        guard.news_rules.clear();
        guard.esg_calls.clear();
        guard.news_calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Inputs without a configured rule yield `NotFound`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn EsgConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn EsgConnector>, controller)
    }
}

async fn play<T>(behavior: Option<MockBehavior<T>>, what: String) -> Result<T, EsgError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => std::future::pending().await,
        None => Err(EsgError::not_found(what)),
    }
}

#[async_trait]
impl EsgConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        Some(self as &dyn EsgProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl EsgProvider for DynamicMockConnector {
    async fn sustainability(&self, company: &str) -> Result<PillarScores, EsgError> {
        // Snapshot the rule so the lock is not held across the await below.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.esg_calls.push(company.to_string());
            guard.esg_rules.get(&normalize_company(company)).cloned()
        };
        play(behavior, format!("esg for {company}")).await
    }
}

#[async_trait]
impl NewsProvider for DynamicMockConnector {
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsArticle>, EsgError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.news_calls.push(req.query().to_string());
            guard.news_rules.get(&normalize_company(req.query())).cloned()
        };
        let mut articles = play(behavior, format!("news for {}", req.query())).await?;
        articles.truncate(usize::try_from(req.limit()).unwrap_or(usize::MAX));
        Ok(articles)
    }
}
