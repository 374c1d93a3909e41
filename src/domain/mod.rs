pub mod config;
pub mod edge;
pub mod error;
pub mod node;
pub mod ports;
