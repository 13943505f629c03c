//! Error types for agentwire.

use thiserror::Error;

/// Primary error type for all agentwire operations.
///
/// The streaming orchestrator is the only boundary where these surface to a
/// client, and there they are flattened into a single `RUN_ERROR` protocol
/// event rather than propagated out of the event stream.
#[derive(Error, Debug)]
pub enum AgentWireError {
    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AgentWireError {
    /// Create an agent error from any displayable source.
    pub fn agent(message: impl Into<String>) -> Self {
        Self::Agent(message.into())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AgentWireError>;
