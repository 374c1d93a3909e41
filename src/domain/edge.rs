use crate::domain::node::EndpointRef;
use serde::{Deserialize, Serialize};

/// Edge kind - which implementation produced an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Built by the separately compiled edge engine
    Native,
    /// Built in-process, holding its endpoints directly
    Managed,
    /// Declared only; no edge of this kind can be constructed
    Debug,
}

/// Edge capability - connects two endpoints and can be queried as an edge.
///
/// Endpoints are positional: `endpoints().0` is the `a` passed at
/// construction and `endpoints().1` is `b`. Comparison through
/// [`Edge::connects`] ignores that order.
pub trait Edge<T>: Send + Sync {
    fn kind(&self) -> EdgeKind;

    fn endpoints(&self) -> (&EndpointRef<T>, &EndpointRef<T>);

    /// Engine-assigned handle, if the implementation has one
    fn handle(&self) -> Option<u64> {
        None
    }

    /// True if this edge joins exactly `a` and `b`, in either order.
    fn connects(&self, a: &EndpointRef<T>, b: &EndpointRef<T>) -> bool {
        let (first, second) = self.endpoints();
        (first.same_node(a) && second.same_node(b)) || (first.same_node(b) && second.same_node(a))
    }

    /// The endpoint on the other side of `node`, or `None` if `node` is not an endpoint.
    fn opposite(&self, node: &EndpointRef<T>) -> Option<&EndpointRef<T>> {
        let (first, second) = self.endpoints();
        if first.same_node(node) {
            Some(second)
        } else if second.same_node(node) {
            Some(first)
        } else {
            None
        }
    }
}
