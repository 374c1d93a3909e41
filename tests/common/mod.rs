//! Helpers shared by the integration tests: mock ports and batch fixtures.
#![allow(dead_code)]

pub mod fixtures;
pub mod mock;
