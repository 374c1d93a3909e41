use crate::adapters::edge::NativeEdge;
use crate::domain::edge::Edge;
use crate::domain::error::EngineError;
use crate::domain::node::EndpointRef;
use crate::domain::ports::NativeEdgeEngine;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-process edge engine that hands out engine handles.
///
/// Stands in for a separately compiled engine: each created edge gets a
/// unique, increasing handle. Handle allocation is lock-free, so the engine
/// can be shared by concurrent callers. An optional capacity caps the number
/// of edges the engine will link.
pub struct HandleEngine {
    name: String,
    linked: AtomicU64,
    capacity: Option<u64>,
}

impl HandleEngine {
    pub fn new() -> Self {
        Self {
            name: "handle".to_string(),
            linked: AtomicU64::new(0),
            capacity: None,
        }
    }

    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    /// Number of edges linked so far
    pub fn linked(&self) -> u64 {
        self.linked.load(Ordering::Acquire)
    }

    fn next_handle(&self) -> Result<u64, EngineError> {
        let capacity = self.capacity;
        self.linked
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| match capacity {
                Some(max) if n >= max => None,
                _ => n.checked_add(1),
            })
            .map(|previous| previous + 1)
            .map_err(|n| EngineError::Rejected {
                engine: self.name.clone(),
                reason: match capacity {
                    Some(max) if n >= max => format!("capacity of {} edges exhausted", max),
                    _ => "handle space exhausted".to_string(),
                },
            })
    }
}

impl Default for HandleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> NativeEdgeEngine<T> for HandleEngine {
    fn create(
        &self,
        a: &EndpointRef<T>,
        b: &EndpointRef<T>,
    ) -> Result<Box<dyn Edge<T>>, EngineError> {
        let handle = self.next_handle()?;
        Ok(Box::new(NativeEdge::new(handle, a.clone(), b.clone())))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
