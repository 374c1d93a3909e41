use crate::domain::edge::{Edge, EdgeKind};
use crate::domain::node::EndpointRef;

/// In-process edge holding both endpoint references directly
pub struct ManagedEdge<T> {
    a: EndpointRef<T>,
    b: EndpointRef<T>,
}

impl<T> ManagedEdge<T> {
    pub fn new(a: EndpointRef<T>, b: EndpointRef<T>) -> Self {
        Self { a, b }
    }
}

impl<T: Send + Sync> Edge<T> for ManagedEdge<T> {
    fn kind(&self) -> EdgeKind {
        EdgeKind::Managed
    }

    fn endpoints(&self) -> (&EndpointRef<T>, &EndpointRef<T>) {
        (&self.a, &self.b)
    }
}
