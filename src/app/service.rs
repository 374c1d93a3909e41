use crate::app::dto::*;
use crate::app::selector::EdgeSelector;
use crate::domain::config::{EdgeStrategy, SelectorConfig};
use crate::domain::edge::Edge;
use crate::domain::node::{EndpointRef, NodeId, SpaceNode};
use crate::domain::ports::{ConfigProvider, NativeEdgeEngine};
use anyhow::{Context as _, Result, anyhow, bail};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Edge service - loads selector configuration once and connects batches of
/// labelled nodes.
pub struct EdgeService {
    selector: EdgeSelector<String>,
}

impl EdgeService {
    /// Load configuration and reject unsupported combinations before any
    /// edge is requested.
    pub fn from_provider(
        provider: &dyn ConfigProvider,
        engine: Arc<dyn NativeEdgeEngine<String>>,
    ) -> Result<Self> {
        let config = provider.load().context("Failed to load selector config")?;
        config
            .validate()
            .context("Selector config rejected at startup")?;
        Ok(Self::with_config(config, engine))
    }

    /// Like [`EdgeService::from_provider`] but defers unsupported
    /// configurations to the first `connect` call.
    pub fn unchecked(
        provider: &dyn ConfigProvider,
        engine: Arc<dyn NativeEdgeEngine<String>>,
    ) -> Result<Self> {
        let config = provider.load().context("Failed to load selector config")?;
        if config.strategy() == EdgeStrategy::Debug {
            warn!("debug edges requested; every connect will fail");
        }
        Ok(Self::with_config(config, engine))
    }

    fn with_config(config: SelectorConfig, engine: Arc<dyn NativeEdgeEngine<String>>) -> Self {
        info!(
            use_native = config.use_native,
            debug_enabled = config.debug_enabled,
            engine = engine.name(),
            "selector config loaded"
        );
        Self {
            selector: EdgeSelector::new(config, engine),
        }
    }

    pub fn selector(&self) -> &EdgeSelector<String> {
        &self.selector
    }

    pub fn check(&self) -> CheckReport {
        let config = self.selector.config();
        CheckReport {
            use_native: config.use_native,
            debug_enabled: config.debug_enabled,
            strategy: self.selector.strategy(),
        }
    }

    /// Connect every pair in `batch`.
    ///
    /// Node ids must be unique and every pair must name known nodes; both are
    /// checked before the first edge is created. The first selector error
    /// aborts the batch.
    pub fn connect(&self, batch: &EdgeBatch) -> Result<ConnectReport> {
        let nodes = index_nodes(batch)?;

        let mut endpoints = Vec::with_capacity(batch.pairs.len());
        for (i, pair) in batch.pairs.iter().enumerate() {
            let a = lookup(&nodes, pair.a).with_context(|| format!("Invalid pair #{}", i))?;
            let b = lookup(&nodes, pair.b).with_context(|| format!("Invalid pair #{}", i))?;
            endpoints.push((a, b));
        }

        let mut edges = Vec::with_capacity(endpoints.len());
        for (i, (a, b)) in endpoints.into_iter().enumerate() {
            let edge = self
                .selector
                .create(a, b)
                .with_context(|| format!("Failed to connect pair #{} ({}, {})", i, a.id(), b.id()))?;
            edges.push(summarize(edge.as_ref()));
        }

        info!(count = edges.len(), strategy = %self.selector.strategy(), "batch connected");

        Ok(ConnectReport {
            strategy: self.selector.strategy(),
            count: edges.len(),
            edges,
        })
    }
}

fn index_nodes(batch: &EdgeBatch) -> Result<HashMap<NodeId, EndpointRef<String>>> {
    let mut nodes = HashMap::with_capacity(batch.nodes.len());
    for spec in &batch.nodes {
        let endpoint = EndpointRef::new(SpaceNode::new(spec.id, spec.label.clone()));
        if nodes.insert(spec.id, endpoint).is_some() {
            bail!("Duplicate node id: {}", spec.id);
        }
    }
    Ok(nodes)
}

fn lookup(nodes: &HashMap<NodeId, EndpointRef<String>>, id: NodeId) -> Result<&EndpointRef<String>> {
    nodes.get(&id).ok_or_else(|| anyhow!("Unknown node id: {}", id))
}

fn summarize(edge: &dyn Edge<String>) -> EdgeSummary {
    let (a, b) = edge.endpoints();
    EdgeSummary {
        kind: edge.kind(),
        a: endpoint_summary(a),
        b: endpoint_summary(b),
        handle: edge.handle(),
    }
}

fn endpoint_summary(endpoint: &EndpointRef<String>) -> EndpointSummary {
    EndpointSummary {
        id: endpoint.id(),
        label: endpoint.content().clone(),
    }
}
