//! Concrete edge implementations

mod managed;
mod native;

pub use managed::ManagedEdge;
pub use native::NativeEdge;
