use crate::domain::error::EdgeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process-wide selector flags, read once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorConfig {
    #[serde(default)]
    pub use_native: bool,
    #[serde(default)]
    pub debug_enabled: bool,
}

/// Edge construction strategy derived from [`SelectorConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStrategy {
    Native,
    Managed,
    Debug,
}

impl SelectorConfig {
    pub fn new(use_native: bool, debug_enabled: bool) -> Self {
        Self {
            use_native,
            debug_enabled,
        }
    }

    pub fn native() -> Self {
        Self::new(true, false)
    }

    pub fn managed() -> Self {
        Self::new(false, false)
    }

    /// Exactly one strategy per flag combination. The native flag dominates
    /// the debug flag.
    pub fn strategy(&self) -> EdgeStrategy {
        if self.use_native {
            EdgeStrategy::Native
        } else if !self.debug_enabled {
            EdgeStrategy::Managed
        } else {
            EdgeStrategy::Debug
        }
    }

    /// Rejects the debug-only combination up front, before any edge is requested.
    pub fn validate(&self) -> Result<(), EdgeError> {
        match self.strategy() {
            EdgeStrategy::Debug => Err(EdgeError::debug_unsupported()),
            EdgeStrategy::Native | EdgeStrategy::Managed => Ok(()),
        }
    }
}

impl fmt::Display for EdgeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeStrategy::Native => "native",
            EdgeStrategy::Managed => "managed",
            EdgeStrategy::Debug => "debug",
        };
        f.write_str(name)
    }
}
