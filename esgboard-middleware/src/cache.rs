use std::sync::Arc;

use async_trait::async_trait;
use esgboard_core::connector::{EsgConnector, EsgProvider, NewsProvider};
use esgboard_core::{
    Capability, EsgError, Middleware, NewsArticle, NewsRequest, PillarScores, normalize_company,
};
use esgboard_types::CacheConfig;
use moka::future::Cache;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct NewsKey {
    query: String,
    limit: u32,
}

impl From<&NewsRequest> for NewsKey {
    fn from(req: &NewsRequest) -> Self {
        Self {
            query: normalize_company(req.query()),
            limit: req.limit(),
        }
    }
}

fn build_store<K, V>(cfg: &CacheConfig, cap: Capability) -> Option<Cache<K, V>>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    if !cfg.is_enabled(cap) {
        return None;
    }
    let mut builder = Cache::builder().max_capacity(cfg.capacity_for(cap));
    if let Some(ttl) = cfg.ttl_for(cap) {
        builder = builder.time_to_live(ttl);
    }
    Some(builder.build())
}

// Per-capability stores; `None` means disabled (TTL=0).
#[derive(Clone)]
struct Stores {
    esg: Option<Cache<String, PillarScores>>,
    news: Option<Cache<NewsKey, Arc<Vec<NewsArticle>>>>,
}

impl Stores {
    fn new(cfg: &CacheConfig) -> Self {
        Self {
            esg: build_store(cfg, Capability::Esg),
            news: build_store(cfg, Capability::News),
        }
    }
}

/// Cloneable handle onto the caches of one `CachingConnector`.
///
/// Clearing is the only invalidation besides TTL expiry.
#[derive(Clone)]
pub struct CacheHandle {
    stores: Stores,
}

impl CacheHandle {
    /// Drop every cached result.
    pub fn clear(&self) {
        if let Some(c) = &self.stores.esg {
            c.invalidate_all();
        }
        if let Some(c) = &self.stores.news {
            c.invalidate_all();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("esgboard cache cleared");
    }

    /// Whether results for `cap` are being cached.
    #[must_use]
    pub const fn caches(&self, cap: Capability) -> bool {
        match cap {
            Capability::Esg => self.stores.esg.is_some(),
            Capability::News => self.stores.news.is_some(),
            _ => false,
        }
    }
}

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
    stores: Stores,
}

impl CacheMiddleware {
    /// Layer name used in `MiddlewareStack` snapshots.
    pub const NAME: &'static str = "CachingMiddleware";

    #[must_use]
    pub fn new(cfg: CacheConfig) -> Self {
        let stores = Stores::new(&cfg);
        Self { cfg, stores }
    }

    /// Handle that clears the caches of the connector this layer will wrap.
    #[must_use]
    pub fn handle(&self) -> CacheHandle {
        CacheHandle {
            stores: self.stores.clone(),
        }
    }

    /// The configuration this layer was built from.
    #[must_use]
    pub const fn config(&self) -> &CacheConfig {
        &self.cfg
    }
}

impl Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn EsgConnector>) -> Arc<dyn EsgConnector> {
        let Self { stores, .. } = *self;
        Arc::new(CachingConnector { inner, stores })
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.cfg).unwrap_or(serde_json::Value::Null)
    }
}

/// Connector wrapper that memoizes successful responses of the inner connector.
pub struct CachingConnector {
    inner: Arc<dyn EsgConnector>,
    stores: Stores,
}

impl CachingConnector {
    /// Wrap `inner` with caches built from `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn EsgConnector>, cfg: &CacheConfig) -> Self {
        Self {
            inner,
            stores: Stores::new(cfg),
        }
    }

    /// Handle that clears this connector's caches.
    #[must_use]
    pub fn handle(&self) -> CacheHandle {
        CacheHandle {
            stores: self.stores.clone(),
        }
    }

    fn inner_esg(&self) -> Result<&dyn EsgProvider, EsgError> {
        self.inner
            .as_esg_provider()
            .ok_or_else(|| EsgError::unsupported(Capability::Esg.as_str()))
    }

    fn inner_news(&self) -> Result<&dyn NewsProvider, EsgError> {
        self.inner
            .as_news_provider()
            .ok_or_else(|| EsgError::unsupported(Capability::News.as_str()))
    }
}

#[async_trait]
impl EsgConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        self.inner
            .as_esg_provider()
            .map(|_| self as &dyn EsgProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        self.inner
            .as_news_provider()
            .map(|_| self as &dyn NewsProvider)
    }
}

#[async_trait]
impl EsgProvider for CachingConnector {
    async fn sustainability(&self, company: &str) -> Result<PillarScores, EsgError> {
        let Some(store) = &self.stores.esg else {
            return self.inner_esg()?.sustainability(company).await;
        };
        let key = normalize_company(company);
        if let Some(hit) = store.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::trace!(connector = self.inner.name(), company = %key, "esg cache hit");
            return Ok(hit);
        }
        let value = self.inner_esg()?.sustainability(company).await?;
        store.insert(key, value).await;
        Ok(value)
    }
}

#[async_trait]
impl NewsProvider for CachingConnector {
    async fn news(&self, req: &NewsRequest) -> Result<Vec<NewsArticle>, EsgError> {
        let Some(store) = &self.stores.news else {
            return self.inner_news()?.news(req).await;
        };
        let key = NewsKey::from(req);
        if let Some(hit) = store.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::trace!(connector = self.inner.name(), query = %key.query, "news cache hit");
            return Ok((*hit).clone());
        }
        let value = self.inner_news()?.news(req).await?;
        store.insert(key, Arc::new(value.clone())).await;
        Ok(value)
    }
}
