use crate::domain::config::SelectorConfig;
use crate::domain::ports::ConfigProvider;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Reads selector flags from a JSON file:
/// `{"use_native": bool, "debug_enabled": bool}`
pub struct JsonConfigProvider {
    path: PathBuf,
}

impl JsonConfigProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigProvider for JsonConfigProvider {
    fn load(&self) -> Result<SelectorConfig> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse selector config: {}", self.path.display()))
    }
}
