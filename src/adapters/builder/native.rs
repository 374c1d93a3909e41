use crate::domain::config::EdgeStrategy;
use crate::domain::edge::Edge;
use crate::domain::error::EdgeError;
use crate::domain::node::EndpointRef;
use crate::domain::ports::{EdgeBuilder, NativeEdgeEngine};
use std::sync::Arc;

/// Pass-through to the native engine's own construction entry point
pub struct NativeEdgeBuilder<T> {
    engine: Arc<dyn NativeEdgeEngine<T>>,
}

impl<T> NativeEdgeBuilder<T> {
    pub fn new(engine: Arc<dyn NativeEdgeEngine<T>>) -> Self {
        Self { engine }
    }
}

impl<T: Send + Sync> EdgeBuilder<T> for NativeEdgeBuilder<T> {
    fn build(&self, a: &EndpointRef<T>, b: &EndpointRef<T>) -> Result<Box<dyn Edge<T>>, EdgeError> {
        Ok(self.engine.create(a, b)?)
    }

    fn strategy(&self) -> EdgeStrategy {
        EdgeStrategy::Native
    }
}
