use crate::domain::config::EdgeStrategy;
use crate::domain::edge::EdgeKind;
use crate::domain::node::NodeId;
use serde::{Deserialize, Serialize};

/// A batch of nodes and the endpoint pairs to connect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeBatch {
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub pairs: Vec<PairSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: NodeId,
    pub label: String,
}

/// Endpoint pair, passed positionally to the selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PairSpec {
    pub a: NodeId,
    pub b: NodeId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub use_native: bool,
    pub debug_enabled: bool,
    pub strategy: EdgeStrategy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectReport {
    pub strategy: EdgeStrategy,
    pub count: usize,
    pub edges: Vec<EdgeSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSummary {
    pub kind: EdgeKind,
    pub a: EndpointSummary,
    pub b: EndpointSummary,
    /// Engine handle; only native edges carry one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub handle: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSummary {
    pub id: NodeId,
    pub label: String,
}
