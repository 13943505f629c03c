//! Shared test helpers: scripted agents and event inspection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use agentwire::agent::{StreamingAgent, UpdateStream};
use agentwire::error::{AgentWireError, Result};
use agentwire::protocol::ProtocolEvent;
use agentwire::types::{AgentUpdate, ModelMessage};

/// Agent that replays a scripted sequence of updates and records the
/// conversation it was given.
pub struct ScriptedAgent {
    updates: Mutex<Vec<std::result::Result<AgentUpdate, AgentWireError>>>,
    received: Arc<Mutex<Vec<ModelMessage>>>,
}

impl ScriptedAgent {
    pub fn new(updates: Vec<std::result::Result<AgentUpdate, AgentWireError>>) -> Arc<Self> {
        Arc::new(Self {
            updates: Mutex::new(updates),
            received: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Messages the agent was invoked with.
    pub fn received(&self) -> Vec<ModelMessage> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl StreamingAgent for ScriptedAgent {
    async fn run_streaming(
        &self,
        messages: Vec<ModelMessage>,
        _cancel: CancellationToken,
    ) -> Result<UpdateStream> {
        *self.received.lock().unwrap() = messages;
        let updates = std::mem::take(&mut *self.updates.lock().unwrap());
        Ok(Box::pin(futures::stream::iter(updates)))
    }
}

/// Agent whose update stream never yields; used for cancellation tests.
pub struct PendingAgent;

#[async_trait]
impl StreamingAgent for PendingAgent {
    async fn run_streaming(
        &self,
        _messages: Vec<ModelMessage>,
        _cancel: CancellationToken,
    ) -> Result<UpdateStream> {
        Ok(Box::pin(futures::stream::pending()))
    }
}

/// Agent that fails before producing any update.
pub struct FailingStartAgent;

#[async_trait]
impl StreamingAgent for FailingStartAgent {
    async fn run_streaming(
        &self,
        _messages: Vec<ModelMessage>,
        _cancel: CancellationToken,
    ) -> Result<UpdateStream> {
        Err(AgentWireError::agent("model unavailable"))
    }
}

/// The wire discriminators of an event sequence, for order assertions.
pub fn event_types(events: &[ProtocolEvent]) -> Vec<&'static str> {
    events.iter().map(ProtocolEvent::event_type).collect()
}
