//! Configuration provider adapters

pub mod json;

use crate::domain::config::SelectorConfig;
use crate::domain::ports::ConfigProvider;
use anyhow::Result;

pub use json::JsonConfigProvider;

/// Provider returning a fixed configuration
pub struct StaticConfigProvider {
    config: SelectorConfig,
}

impl StaticConfigProvider {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn load(&self) -> Result<SelectorConfig> {
        Ok(self.config)
    }
}
