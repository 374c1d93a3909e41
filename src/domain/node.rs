use std::fmt;
use std::sync::Arc;

/// Unique identifier for a node in the spatial organization
pub type NodeId = u32;

/// Space node - a point in the spatial organization carrying an opaque payload
#[derive(Debug)]
pub struct SpaceNode<T> {
    id: NodeId,
    content: T,
}

impl<T> SpaceNode<T> {
    pub fn new(id: NodeId, content: T) -> Self {
        Self { id, content }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn content(&self) -> &T {
        &self.content
    }
}

/// Shared, identity-only reference to a space node.
///
/// Cloning is cheap and never copies the node. Two references are equal
/// only when they point at the same node allocation; equal ids or payloads
/// on distinct nodes do not make them equal.
pub struct EndpointRef<T> {
    node: Arc<SpaceNode<T>>,
}

impl<T> EndpointRef<T> {
    pub fn new(node: SpaceNode<T>) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    pub fn id(&self) -> NodeId {
        self.node.id
    }

    pub fn content(&self) -> &T {
        &self.node.content
    }

    pub fn node(&self) -> &SpaceNode<T> {
        &self.node
    }

    /// True if both references point at the same node.
    pub fn same_node(&self, other: &EndpointRef<T>) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl<T> From<SpaceNode<T>> for EndpointRef<T> {
    fn from(node: SpaceNode<T>) -> Self {
        Self::new(node)
    }
}

// Manual impls: deriving would require `T: Clone` / `T: PartialEq`.
impl<T> Clone for EndpointRef<T> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T> PartialEq for EndpointRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other)
    }
}

impl<T> Eq for EndpointRef<T> {}

impl<T: fmt::Debug> fmt::Debug for EndpointRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointRef")
            .field("id", &self.node.id)
            .field("content", &self.node.content)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_identity() {
        let a = EndpointRef::new(SpaceNode::new(1, "N1"));
        let b = a.clone();
        assert_eq!(a, b);
        assert!(a.same_node(&b));
        assert_eq!(b.id(), 1);
        assert_eq!(*b.content(), "N1");
    }

    #[test]
    fn test_equal_payloads_on_distinct_nodes_are_not_equal() {
        let a = EndpointRef::new(SpaceNode::new(1, "N1"));
        let b = EndpointRef::new(SpaceNode::new(1, "N1"));
        assert_ne!(a, b);
        assert!(!a.same_node(&b));
    }

    #[test]
    fn test_from_space_node() {
        let r: EndpointRef<u8> = SpaceNode::new(7, 42).into();
        assert_eq!(r.node().id(), 7);
        assert_eq!(*r.node().content(), 42);
    }
}
