//! Edge builder adapters
//!
//! One builder per edge strategy. The selector picks exactly one of these
//! from configuration and keeps it for its whole lifetime.

mod debug;
mod managed;
mod native;

pub use debug::DebugEdgeBuilder;
pub use managed::ManagedEdgeBuilder;
pub use native::NativeEdgeBuilder;

use crate::domain::config::EdgeStrategy;
use crate::domain::ports::{EdgeBuilder, NativeEdgeEngine};
use std::sync::Arc;

/// Build the edge builder for `strategy`.
///
/// The engine is only retained by the native builder.
pub fn builder_for<T: Send + Sync + 'static>(
    strategy: EdgeStrategy,
    engine: Arc<dyn NativeEdgeEngine<T>>,
) -> Box<dyn EdgeBuilder<T>> {
    match strategy {
        EdgeStrategy::Native => Box::new(NativeEdgeBuilder::new(engine)),
        EdgeStrategy::Managed => Box::new(ManagedEdgeBuilder),
        EdgeStrategy::Debug => Box::new(DebugEdgeBuilder),
    }
}
