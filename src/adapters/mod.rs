pub mod builder;
pub mod config;
pub mod edge;
pub mod engine;
