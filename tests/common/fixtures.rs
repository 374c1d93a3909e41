//! Test fixture generators for integration tests.
#![allow(dead_code)]

use spatial_edge::app::dto::{EdgeBatch, NodeSpec, PairSpec};
use spatial_edge::domain::node::{EndpointRef, SpaceNode};

pub fn endpoint(id: u32, label: &str) -> EndpointRef<String> {
    EndpointRef::new(SpaceNode::new(id, label.to_string()))
}

/// Nodes N1..N3 and the pairs (N1, N2), (N2, N3).
pub fn create_batch_chain() -> EdgeBatch {
    EdgeBatch {
        nodes: vec![node_spec(1, "N1"), node_spec(2, "N2"), node_spec(3, "N3")],
        pairs: vec![PairSpec { a: 1, b: 2 }, PairSpec { a: 2, b: 3 }],
    }
}

pub fn create_batch_unknown_node() -> EdgeBatch {
    EdgeBatch {
        nodes: vec![node_spec(1, "N1")],
        pairs: vec![PairSpec { a: 1, b: 9 }],
    }
}

pub fn create_batch_duplicate_node() -> EdgeBatch {
    EdgeBatch {
        nodes: vec![node_spec(1, "N1"), node_spec(1, "again")],
        pairs: vec![],
    }
}

pub const BATCH_CHAIN_JSON: &str = r#"{
  "nodes": [
    {"id": 1, "label": "N1"},
    {"id": 2, "label": "N2"},
    {"id": 3, "label": "N3"}
  ],
  "pairs": [
    {"a": 1, "b": 2},
    {"a": 2, "b": 3}
  ]
}"#;

fn node_spec(id: u32, label: &str) -> NodeSpec {
    NodeSpec {
        id,
        label: label.to_string(),
    }
}
