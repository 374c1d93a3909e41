use crate::domain::edge::{Edge, EdgeKind};
use crate::domain::node::EndpointRef;

/// Edge linked by a native edge engine.
///
/// The handle identifies the edge on the engine's side of the boundary.
pub struct NativeEdge<T> {
    handle: u64,
    a: EndpointRef<T>,
    b: EndpointRef<T>,
}

impl<T> NativeEdge<T> {
    pub fn new(handle: u64, a: EndpointRef<T>, b: EndpointRef<T>) -> Self {
        Self { handle, a, b }
    }
}

impl<T: Send + Sync> Edge<T> for NativeEdge<T> {
    fn kind(&self) -> EdgeKind {
        EdgeKind::Native
    }

    fn endpoints(&self) -> (&EndpointRef<T>, &EndpointRef<T>) {
        (&self.a, &self.b)
    }

    fn handle(&self) -> Option<u64> {
        Some(self.handle)
    }
}
