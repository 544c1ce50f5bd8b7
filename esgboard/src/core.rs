use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use esgboard_core::connector::EsgConnector;
use esgboard_core::{
    CacheConfig, Capability, EsgConfig, EsgError, FetchStrategy, MissingDataPolicy,
    PlaceholderRange, SentimentMode, normalize_company,
};
use esgboard_middleware::{CacheHandle, ConnectorBuilder};

use crate::router::util::collapse_errors;

/// Orchestrator that routes requests across registered providers.
pub struct EsgBoard {
    pub(crate) connectors: Vec<Arc<dyn EsgConnector>>,
    pub(crate) cfg: EsgConfig,
    pub(crate) caches: Vec<CacheHandle>,
}

/// Builder for constructing an `EsgBoard` orchestrator with custom configuration.
pub struct EsgBoardBuilder {
    connectors: Vec<Arc<dyn EsgConnector>>,
    cfg: EsgConfig,
    cache: Option<CacheConfig>,
}

impl Default for EsgBoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn names_of(connectors: &[Arc<dyn EsgConnector>]) -> Vec<String> {
    connectors.iter().map(|c| c.name().to_string()).collect()
}

impl EsgBoardBuilder {
    /// Create a new builder with defaults: no connectors, priority-with-fallback
    /// fetches, 5s provider timeout, skip-and-warn on failed lookups, zero-filled
    /// missing pillars, tone-based news sentiment, no cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: EsgConfig::default(),
            cache: None,
        }
    }

    /// Replace the whole configuration, e.g. one loaded from JSON.
    #[must_use]
    pub fn config(mut self, cfg: EsgConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Register a provider connector.
    ///
    /// Registration order is the routing order when no preference is set.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn EsgConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the global provider preference.
    ///
    /// This orders the listed connectors first; unlisted but capable connectors
    /// are still tried after them.
    #[must_use]
    pub fn prefer(mut self, connectors_desc: &[Arc<dyn EsgConnector>]) -> Self {
        self.cfg.provider_priority = names_of(connectors_desc);
        self
    }

    /// Set the provider preference for one company, overriding [`prefer`](Self::prefer).
    #[must_use]
    pub fn prefer_company(
        mut self,
        company: &str,
        connectors_desc: &[Arc<dyn EsgConnector>],
    ) -> Self {
        self.cfg
            .per_company_priority
            .insert(normalize_company(company), names_of(connectors_desc));
        self
    }

    /// Select the fetch strategy for multi-provider requests.
    ///
    /// - `PriorityWithFallback`: try providers in order until one succeeds.
    /// - `Latency`: race all eligible providers and take the first success.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for leaderboard fan-out.
    ///
    /// When exceeded, the leaderboard fails with `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Choose what happens to companies whose scores cannot be fetched.
    #[must_use]
    pub const fn missing_data(mut self, policy: MissingDataPolicy) -> Self {
        self.cfg.missing_data = policy;
        self
    }

    /// Inclusive range placeholder pillar scores are drawn from.
    #[must_use]
    pub const fn placeholder_range(mut self, min: u8, max: u8) -> Self {
        self.cfg.placeholder_range = PlaceholderRange { min, max };
        self
    }

    /// Seed placeholder generation for reproducible output.
    #[must_use]
    pub const fn placeholder_seed(mut self, seed: u64) -> Self {
        self.cfg.placeholder_seed = Some(seed);
        self
    }

    /// Zero-fill absent pillars (`true`, default) or skip such records with a warning.
    #[must_use]
    pub const fn fill_missing_pillars(mut self, yes: bool) -> Self {
        self.cfg.fill_missing_pillars = yes;
        self
    }

    /// Select how article sentiment is derived.
    #[must_use]
    pub const fn sentiment(mut self, mode: SentimentMode) -> Self {
        self.cfg.sentiment = mode;
        self
    }

    /// Wrap every connector with a result cache.
    ///
    /// Cached results persist for the orchestrator's lifetime, subject to TTL,
    /// until [`EsgBoard::clear_cache`] is called.
    #[must_use]
    pub fn with_cache(mut self, cfg: CacheConfig) -> Self {
        self.cache = Some(cfg);
        self
    }

    /// Build the `EsgBoard` orchestrator.
    ///
    /// Preference lists are filtered to registered connector names and de-duplicated.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered.
    pub fn build(mut self) -> Result<EsgBoard, EsgError> {
        if self.connectors.is_empty() {
            return Err(EsgError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        let known: HashSet<&'static str> =
            self.connectors.iter().map(|c| c.key().as_str()).collect();
        let filter_names = |v: &mut Vec<String>| {
            let mut seen: HashSet<String> = HashSet::new();
            v.retain(|n| known.contains(n.as_str()) && seen.insert(n.clone()));
        };
        filter_names(&mut self.cfg.provider_priority);
        for v in self.cfg.per_company_priority.values_mut() {
            filter_names(v);
        }
        self.cfg.per_company_priority = self
            .cfg
            .per_company_priority
            .into_iter()
            .map(|(k, v)| (normalize_company(&k), v))
            .collect();
        self.cfg.placeholder_range = self.cfg.placeholder_range.normalized();

        let mut caches = Vec::new();
        let connectors = match &self.cache {
            Some(cache_cfg) => self
                .connectors
                .into_iter()
                .map(|raw| {
                    let builder = ConnectorBuilder::new(raw).with_cache(cache_cfg);
                    caches.extend(builder.cache_handle());
                    builder.build()
                })
                .collect(),
            None => self.connectors,
        };

        Ok(EsgBoard {
            connectors,
            cfg: self.cfg,
            caches,
        })
    }
}

/// Attach the connector name to errors that do not already carry routing context.
pub fn tag_err(connector: &str, e: EsgError) -> EsgError {
    match e {
        e @ (EsgError::NotFound { .. }
        | EsgError::ProviderTimeout { .. }
        | EsgError::Connector { .. }
        | EsgError::RequestTimeout { .. }
        | EsgError::AllProvidersTimedOut { .. }
        | EsgError::AllProvidersFailed(_)) => e,
        other => EsgError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Run `fut` under an optional deadline, mapping expiry to `RequestTimeout("request")`.
pub(crate) async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    fut: Fut,
) -> Result<T, EsgError>
where
    Fut: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| EsgError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl EsgBoard {
    /// Start building a new `EsgBoard` instance.
    #[must_use]
    pub fn builder() -> EsgBoardBuilder {
        EsgBoardBuilder::new()
    }

    /// The effective configuration.
    #[must_use]
    pub const fn config(&self) -> &EsgConfig {
        &self.cfg
    }

    /// Names of the registered connectors, in registration order.
    #[must_use]
    pub fn connector_names(&self) -> Vec<&'static str> {
        self.connectors.iter().map(|c| c.name()).collect()
    }

    /// Drop every cached provider result. A no-op without a cache.
    pub fn clear_cache(&self) {
        for handle in &self.caches {
            handle.clear();
        }
        #[cfg(feature = "tracing")]
        tracing::info!(caches = self.caches.len(), "cleared cached provider results");
    }

    /// Whether a result cache is configured.
    #[must_use]
    pub fn has_cache(&self) -> bool {
        !self.caches.is_empty()
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "esgboard::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, EsgError>
    where
        Fut: core::future::Future<Output = Result<T, EsgError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(EsgError::provider_timeout(
                connector_name,
                capability.as_str(),
            ))
        })
    }

    /// Connectors in routing order for `key` (a company or query).
    pub(crate) fn ordered(&self, key: &str) -> Vec<Arc<dyn EsgConnector>> {
        let pref = self
            .cfg
            .per_company_priority
            .get(&normalize_company(key))
            .unwrap_or(&self.cfg.provider_priority);
        let pos: HashMap<&str, usize> = pref
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        let mut out: Vec<(usize, Arc<dyn EsgConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        out.sort_by_key(|(orig_i, c)| {
            let rank = pos.get(c.key().as_str()).copied().unwrap_or(usize::MAX);
            (rank, *orig_i)
        });
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Generic single-item fetch.
    ///
    /// - Honors `FetchStrategy::{PriorityWithFallback, Latency}`
    /// - Applies the per-provider timeout in both modes
    /// - Returns the value with the name of the connector that produced it
    /// - Collapses failures: `NotFound` when every provider reported not-found,
    ///   `AllProvidersTimedOut` when every provider timed out, `Unsupported` when
    ///   none offer the capability, else `AllProvidersFailed`
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "esgboard::core::fetch_single",
            skip(self, call),
            fields(key = %key, capability = %capability),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        key: &str,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<(T, &'static str), EsgError>
    where
        T: Send,
        F: Fn(Arc<dyn EsgConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, EsgError>> + Send,
    {
        let what = format!("{not_found_label} for {}", key.trim());
        match self.cfg.fetch_strategy {
            FetchStrategy::Latency => {
                self.fetch_single_latency(key, capability, what, call)
                    .await
            }
            _ => {
                self.fetch_single_priority_with_fallback(key, capability, what, call)
                    .await
            }
        }
    }

    async fn fetch_single_priority_with_fallback<T, F, Fut>(
        &self,
        key: &str,
        capability: Capability,
        not_found_what: String,
        call: F,
    ) -> Result<(T, &'static str), EsgError>
    where
        T: Send,
        F: Fn(Arc<dyn EsgConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, EsgError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<EsgError> = Vec::new();

        for c in self.ordered(key) {
            let name = c.name();
            let Some(fut) = call(c) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(name, capability, self.cfg.provider_timeout, fut)
                .await
            {
                Ok(v) => return Ok((v, name)),
                Err(e @ (EsgError::NotFound { .. } | EsgError::ProviderTimeout { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(name, e)),
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(not_found_what),
        ))
    }

    async fn fetch_single_latency<T, F, Fut>(
        &self,
        key: &str,
        capability: Capability,
        not_found_what: String,
        call: F,
    ) -> Result<(T, &'static str), EsgError>
    where
        T: Send,
        F: Fn(Arc<dyn EsgConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, EsgError>> + Send,
    {
        use futures::stream::{FuturesUnordered, StreamExt};

        let mut futs = FuturesUnordered::new();
        for c in self.ordered(key) {
            let name = c.name();
            if let Some(fut) = call(c) {
                let timeout = self.cfg.provider_timeout;
                futs.push(async move {
                    (
                        name,
                        Self::provider_call_with_timeout(name, capability, timeout, fut).await,
                    )
                });
            }
        }
        let attempted_any = !futs.is_empty();

        let mut errors: Vec<EsgError> = Vec::new();
        while let Some((name, res)) = futs.next().await {
            match res {
                Ok(v) => return Ok((v, name)),
                Err(e @ (EsgError::ProviderTimeout { .. } | EsgError::NotFound { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(name, e)),
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(not_found_what),
        ))
    }
}
