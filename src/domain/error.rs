use thiserror::Error;

/// Message carried by every attempt to build a debug edge
pub const DEBUG_EDGE_UNSUPPORTED: &str = "debug edge variant has not been implemented yet";

/// Errors raised while selecting or constructing an edge
#[derive(Debug, Error)]
pub enum EdgeError {
    /// The configuration selects a variant that cannot be built.
    /// Retrying without changing the configuration always fails the same way.
    #[error("unsupported configuration: {message}")]
    UnsupportedConfiguration { message: String },

    /// The native engine refused to construct the edge
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl EdgeError {
    pub fn debug_unsupported() -> Self {
        EdgeError::UnsupportedConfiguration {
            message: DEBUG_EDGE_UNSUPPORTED.to_string(),
        }
    }

    pub fn is_unsupported_configuration(&self) -> bool {
        matches!(self, EdgeError::UnsupportedConfiguration { .. })
    }
}

/// Errors reported by a native edge engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("edge engine '{engine}' rejected construction: {reason}")]
    Rejected { engine: String, reason: String },
}
