//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use spatial_edge::adapters::edge::NativeEdge;
use spatial_edge::domain::config::SelectorConfig;
use spatial_edge::domain::edge::Edge;
use spatial_edge::domain::error::EngineError;
use spatial_edge::domain::node::{EndpointRef, NodeId};
use spatial_edge::domain::ports::{ConfigProvider, NativeEdgeEngine};

/// Mock native engine that records every construction request.
pub struct MockEngine {
    calls: Mutex<Vec<(NodeId, NodeId)>>,
    reject: bool,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject: false,
        }
    }

    /// Engine that refuses every construction.
    pub fn rejecting() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    pub fn calls(&self) -> Vec<(NodeId, NodeId)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> NativeEdgeEngine<T> for MockEngine {
    fn create(
        &self,
        a: &EndpointRef<T>,
        b: &EndpointRef<T>,
    ) -> std::result::Result<Box<dyn Edge<T>>, EngineError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((a.id(), b.id()));
        if self.reject {
            return Err(EngineError::Rejected {
                engine: "mock".to_string(),
                reason: "rejecting all edges".to_string(),
            });
        }
        Ok(Box::new(NativeEdge::new(calls.len() as u64, a.clone(), b.clone())))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Mock ConfigProvider counting how often it is read.
pub struct MockConfigProvider {
    config: Option<SelectorConfig>,
    loads: AtomicUsize,
}

impl MockConfigProvider {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config: Some(config),
            loads: AtomicUsize::new(0),
        }
    }

    /// Provider whose every load fails.
    pub fn failing() -> Self {
        Self {
            config: None,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ConfigProvider for MockConfigProvider {
    fn load(&self) -> Result<SelectorConfig> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.config
            .ok_or_else(|| anyhow!("configuration backend unavailable"))
    }
}
