//! Serializable description of a connector's middleware onion.

use serde::{Deserialize, Serialize};

/// One wrapper around a connector: its name plus a JSON config snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MiddlewareLayer {
    /// Layer name as reported by the middleware (e.g. "`CachingMiddleware`").
    pub name: String,
    /// Layer-specific configuration; each middleware documents its own keys.
    pub config: serde_json::Value,
}

impl MiddlewareLayer {
    /// Build a layer descriptor.
    #[must_use]
    pub fn new<N: Into<String>>(name: N, config: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

/// Ordered middleware layers, `layers[0]` being the outermost wrapper and the
/// last element the raw connector.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MiddlewareStack {
    /// Layers, outermost first.
    pub layers: Vec<MiddlewareLayer>,
}

impl MiddlewareStack {
    /// An empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append `layer` below every existing one.
    pub fn push_inner(&mut self, layer: MiddlewareLayer) {
        self.layers.push(layer);
    }

    /// First layer with the given name, if any.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MiddlewareLayer> {
        self.layers.iter().find(|l| l.name == name)
    }
}
