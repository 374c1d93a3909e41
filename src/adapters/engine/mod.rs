//! Native edge engine adapters

mod handle;

pub use handle::HandleEngine;
