use crate::adapters::builder::builder_for;
use crate::domain::config::{EdgeStrategy, SelectorConfig};
use crate::domain::edge::Edge;
use crate::domain::error::EdgeError;
use crate::domain::node::EndpointRef;
use crate::domain::ports::{EdgeBuilder, NativeEdgeEngine};
use std::sync::Arc;
use tracing::debug;

/// Edge selector - produces one edge per call using the strategy chosen
/// from configuration at construction time.
///
/// The selector holds no reference to the edges it returns, and `create`
/// neither logs nor mutates shared state, so a single selector can serve
/// any number of concurrent callers.
pub struct EdgeSelector<T> {
    config: SelectorConfig,
    builder: Box<dyn EdgeBuilder<T>>,
}

impl<T: Send + Sync + 'static> EdgeSelector<T> {
    pub fn new(config: SelectorConfig, native_engine: Arc<dyn NativeEdgeEngine<T>>) -> Self {
        let strategy = config.strategy();
        debug!(
            use_native = config.use_native,
            debug_enabled = config.debug_enabled,
            engine = native_engine.name(),
            %strategy,
            "edge strategy selected"
        );
        Self {
            config,
            builder: builder_for(strategy, native_engine),
        }
    }
}

impl<T> EdgeSelector<T> {
    /// Create an edge joining `a` and `b`, passed positionally.
    ///
    /// Fails with [`EdgeError::UnsupportedConfiguration`] when native mode is
    /// off and debug mode is on.
    pub fn create(
        &self,
        a: &EndpointRef<T>,
        b: &EndpointRef<T>,
    ) -> Result<Box<dyn Edge<T>>, EdgeError> {
        self.builder.build(a, b)
    }

    pub fn strategy(&self) -> EdgeStrategy {
        self.builder.strategy()
    }

    pub fn config(&self) -> SelectorConfig {
        self.config
    }
}
