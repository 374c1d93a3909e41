use crate::adapters::edge::ManagedEdge;
use crate::domain::config::EdgeStrategy;
use crate::domain::edge::Edge;
use crate::domain::error::EdgeError;
use crate::domain::node::EndpointRef;
use crate::domain::ports::EdgeBuilder;

/// Builds in-process edges
pub struct ManagedEdgeBuilder;

impl<T: Send + Sync + 'static> EdgeBuilder<T> for ManagedEdgeBuilder {
    fn build(&self, a: &EndpointRef<T>, b: &EndpointRef<T>) -> Result<Box<dyn Edge<T>>, EdgeError> {
        Ok(Box::new(ManagedEdge::new(a.clone(), b.clone())))
    }

    fn strategy(&self) -> EdgeStrategy {
        EdgeStrategy::Managed
    }
}
