//! Builder for composing connectors with middleware layers.
//!
//! Layers form an onion around the raw connector. The builder stores them
//! **outermost-first** (last added = outermost) and applies them in reverse
//! during [`ConnectorBuilder::build`]:
//!
//! ```text
//! builder.with_cache(..).layer(audit)
//!
//! Storage: [Audit, Cache]
//! Applied: Raw -> Cache -> Audit
//! Result:  Audit(Cache(Raw))
//! ```
//!
//! This matches [`MiddlewareStack`](esgboard_types::MiddlewareStack), where
//! `layers[0]` is the outermost layer.

use std::sync::Arc;

use esgboard_core::Middleware;
use esgboard_core::connector::EsgConnector;
use esgboard_types::{CacheConfig, MiddlewareLayer, MiddlewareStack};
use serde_json::json;

use crate::cache::{CacheHandle, CacheMiddleware};

/// Name recorded for the innermost entry of an exported stack.
pub const RAW_LAYER: &str = "RawConnector";

/// Generic middleware builder for composing a connector with layered wrappers.
pub struct ConnectorBuilder {
    raw: Arc<dyn EsgConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
    cache: Option<CacheHandle>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn EsgConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
            cache: None,
        }
    }

    /// Add or replace result caching at the outermost position.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != CacheMiddleware::NAME);
        let mw = CacheMiddleware::new(cfg.clone());
        self.cache = Some(mw.handle());
        self.layers.insert(0, Box::new(mw));
        self
    }

    /// Remove caching if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != CacheMiddleware::NAME);
        self.cache = None;
        self
    }

    /// Handle for clearing the cache layer, when one is configured.
    #[must_use]
    pub fn cache_handle(&self) -> Option<CacheHandle> {
        self.cache.clone()
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Export the current middleware stack configuration for inspection.
    ///
    /// The raw connector is appended as the innermost "layer" for observability.
    #[must_use]
    pub fn to_stack(&self) -> MiddlewareStack {
        let mut stack = MiddlewareStack::new();
        for layer in &self.layers {
            stack.push_inner(layer.layer());
        }
        stack.push_inner(MiddlewareLayer::new(
            RAW_LAYER,
            json!({ "name": self.raw.name() }),
        ));
        stack
    }

    /// Construct a builder from a raw connector and an explicit stack.
    ///
    /// Inverse of [`to_stack`](Self::to_stack). Unknown layer names are ignored,
    /// as is a cache layer whose config does not parse.
    #[must_use]
    pub fn from_stack(raw: Arc<dyn EsgConnector>, stack: &MiddlewareStack) -> Self {
        let mut builder = Self::new(raw);
        for l in &stack.layers {
            if l.name == CacheMiddleware::NAME
                && let Ok(cfg) = serde_json::from_value::<CacheConfig>(l.config.clone())
            {
                let mw = CacheMiddleware::new(cfg);
                builder.cache = Some(mw.handle());
                builder.layers.push(Box::new(mw));
            }
        }
        builder
    }

    /// Build the wrapped connector, applying layers innermost first.
    #[must_use]
    pub fn build(self) -> Arc<dyn EsgConnector> {
        let mut acc: Arc<dyn EsgConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
