//! spatial-edge library — configuration-driven construction of spatial organization edges.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
