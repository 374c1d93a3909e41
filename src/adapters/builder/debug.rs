use crate::domain::config::EdgeStrategy;
use crate::domain::edge::Edge;
use crate::domain::error::EdgeError;
use crate::domain::node::EndpointRef;
use crate::domain::ports::EdgeBuilder;

/// Debug edge builder.
///
/// The debug variant has no implementation: every build fails with
/// [`EdgeError::UnsupportedConfiguration`] and creates nothing.
pub struct DebugEdgeBuilder;

impl<T> EdgeBuilder<T> for DebugEdgeBuilder {
    fn build(&self, _a: &EndpointRef<T>, _b: &EndpointRef<T>) -> Result<Box<dyn Edge<T>>, EdgeError> {
        Err(EdgeError::debug_unsupported())
    }

    fn strategy(&self) -> EdgeStrategy {
        EdgeStrategy::Debug
    }
}
