use std::sync::Arc;

use crate::connector::EsgConnector;
use crate::types::MiddlewareLayer;

/// A connector wrapper that can be composed declaratively.
///
/// Layers are boxed so a builder can hold a heterogeneous list and apply them
/// in order; `name` and `config_json` let that list be exported as a
/// [`MiddlewareStack`](crate::types::MiddlewareStack) and rebuilt later.
pub trait Middleware: Send + Sync {
    /// Consume the layer and wrap `inner`.
    fn apply(self: Box<Self>, inner: Arc<dyn EsgConnector>) -> Arc<dyn EsgConnector>;

    /// Stable layer name; used as the key when rebuilding from a stack.
    fn name(&self) -> &'static str;

    /// Serializable snapshot of the layer's configuration.
    fn config_json(&self) -> serde_json::Value;

    /// This layer as a stack entry.
    fn layer(&self) -> MiddlewareLayer {
        MiddlewareLayer::new(self.name(), self.config_json())
    }
}
