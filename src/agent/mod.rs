//! The agent collaborator contract.

use async_trait::async_trait;
use futures::stream::BoxStream;
use tokio_util::sync::CancellationToken;

use crate::error::{AgentWireError, Result};
use crate::types::{AgentUpdate, ModelMessage};

/// Lazy sequence of generation updates produced by an agent run.
pub type UpdateStream = BoxStream<'static, std::result::Result<AgentUpdate, AgentWireError>>;

/// An agent capable of producing a lazy sequence of generation updates.
///
/// The streaming orchestrator consumes one update at a time and never
/// propagates a failed item out of its own event sequence; an `Err` item
/// terminates consumption and is translated into a `RUN_ERROR` event.
#[async_trait]
pub trait StreamingAgent: Send + Sync {
    /// Run the agent over the given conversation, streaming updates until
    /// generation completes, fails, or `cancel` fires.
    async fn run_streaming(
        &self,
        messages: Vec<ModelMessage>,
        cancel: CancellationToken,
    ) -> Result<UpdateStream>;
}
