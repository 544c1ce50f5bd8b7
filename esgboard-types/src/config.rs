//! Configuration types shared across the orchestrator, middleware, and connectors.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Capability;

/// Strategy for selecting among eligible data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Use priority order and fall back to the next provider on failure.
    #[default]
    PriorityWithFallback,
    /// Race all eligible providers concurrently and return the first success.
    Latency,
}

/// What to do with a company whose scores could not be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MissingDataPolicy {
    /// Drop the company from the report and record a warning.
    #[default]
    Skip,
    /// Substitute randomized placeholder pillar scores and record a warning.
    Placeholder,
}

/// How article sentiment is derived when scoring news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SentimentMode {
    /// Normalize the provider-supplied tone; missing tone counts as neutral.
    #[default]
    Tone,
    /// Ignore tone and count positive/negative words in the title.
    Heuristic,
}

/// Inclusive integer range placeholder pillar scores are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderRange {
    /// Lowest score that may be drawn.
    pub min: u8,
    /// Highest score that may be drawn.
    pub max: u8,
}

impl Default for PlaceholderRange {
    fn default() -> Self {
        Self { min: 50, max: 90 }
    }
}

impl PlaceholderRange {
    /// Range with `min`/`max` swapped into order and capped at 100.
    #[must_use]
    pub fn normalized(self) -> Self {
        let lo = self.min.min(self.max).min(100);
        let hi = self.min.max(self.max).min(100);
        Self { min: lo, max: hi }
    }
}

/// Global configuration for the `EsgBoard` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsgConfig {
    /// Connector names in preferred order; unlisted connectors follow in
    /// registration order.
    pub provider_priority: Vec<String>,
    /// Per-company overrides of `provider_priority`, keyed by lowercase company.
    pub per_company_priority: HashMap<String, Vec<String>>,
    /// Strategy for fetching from multiple providers.
    pub fetch_strategy: FetchStrategy,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional deadline for leaderboard fan-out across companies.
    pub request_timeout: Option<Duration>,
    /// Treatment of companies whose scores could not be fetched.
    pub missing_data: MissingDataPolicy,
    /// Range placeholder scores are drawn from.
    pub placeholder_range: PlaceholderRange,
    /// Seed for placeholder generation; `None` draws from the thread RNG.
    pub placeholder_seed: Option<u64>,
    /// Substitute zero for absent pillar scores instead of skipping the record.
    pub fill_missing_pillars: bool,
    /// Sentiment source used when scoring news.
    pub sentiment: SentimentMode,
}

impl Default for EsgConfig {
    fn default() -> Self {
        Self {
            provider_priority: Vec::new(),
            per_company_priority: HashMap::new(),
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
            missing_data: MissingDataPolicy::default(),
            placeholder_range: PlaceholderRange::default(),
            placeholder_seed: None,
            fill_missing_pillars: true,
            sentiment: SentimentMode::default(),
        }
    }
}

/// Result cache configuration.
///
/// A TTL of `0` disables caching for that capability; an absent TTL keeps
/// entries until they are evicted by capacity or cleared manually.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL applied to capabilities without an override; `None` never expires.
    pub default_ttl_ms: Option<u64>,
    /// Capacity applied to capabilities without an override.
    pub default_max_entries: u64,
    /// TTL overrides keyed by capability label (`"esg"`, `"news"`).
    pub per_capability_ttl_ms: HashMap<String, u64>,
    /// Capacity overrides keyed by capability label.
    pub per_capability_max_entries: HashMap<String, u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: None,
            default_max_entries: 1_000,
            per_capability_ttl_ms: HashMap::new(),
            per_capability_max_entries: HashMap::new(),
        }
    }
}

impl CacheConfig {
    /// Whether results for `cap` should be cached at all.
    #[must_use]
    pub fn is_enabled(&self, cap: Capability) -> bool {
        match self.per_capability_ttl_ms.get(cap.as_str()) {
            Some(ms) => *ms > 0,
            None => self.default_ttl_ms != Some(0),
        }
    }

    /// Effective TTL for `cap`; `None` means entries never expire.
    #[must_use]
    pub fn ttl_for(&self, cap: Capability) -> Option<Duration> {
        self.per_capability_ttl_ms
            .get(cap.as_str())
            .copied()
            .or(self.default_ttl_ms)
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Effective capacity for `cap`, at least one entry.
    #[must_use]
    pub fn capacity_for(&self, cap: Capability) -> u64 {
        self.per_capability_max_entries
            .get(cap.as_str())
            .copied()
            .unwrap_or(self.default_max_entries)
            .max(1)
    }
}
