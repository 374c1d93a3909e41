use crate::domain::config::{EdgeStrategy, SelectorConfig};
use crate::domain::edge::Edge;
use crate::domain::error::{EdgeError, EngineError};
use crate::domain::node::EndpointRef;
use anyhow::Result;

/// Configuration source port (implemented by Infrastructure)
pub trait ConfigProvider: Send + Sync {
    fn load(&self) -> Result<SelectorConfig>;
}

/// Native edge engine port.
///
/// The engine is a black box: it links the endpoints on its side of the
/// boundary and hands back an edge satisfying the [`Edge`] capability.
pub trait NativeEdgeEngine<T>: Send + Sync {
    fn create(
        &self,
        a: &EndpointRef<T>,
        b: &EndpointRef<T>,
    ) -> std::result::Result<Box<dyn Edge<T>>, EngineError>;

    /// Engine name, used in logs and error messages
    fn name(&self) -> &str;
}

/// Edge construction strategy port
pub trait EdgeBuilder<T>: Send + Sync {
    fn build(
        &self,
        a: &EndpointRef<T>,
        b: &EndpointRef<T>,
    ) -> std::result::Result<Box<dyn Edge<T>>, EdgeError>;

    fn strategy(&self) -> EdgeStrategy;
}
