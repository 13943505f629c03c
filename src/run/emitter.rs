//! Translation of generation fragments into protocol events.

use chrono::Utc;
use uuid::Uuid;

use crate::error::AgentWireError;
use crate::protocol::{EventRole, InterruptInfo, ProtocolEvent, RunOutcome};

use super::correlation::{RunCorrelation, ToolCallRecord, ToolResultRecord};

/// Builds protocol events for one run, with consistent id management.
///
/// Wraps a [`RunCorrelation`] and turns its decisions into events: dedup and
/// frontend suppression come back as `None`, everything else as a fully
/// populated event. Created fresh per run and never shared.
#[derive(Debug)]
pub struct EventEmitter {
    correlation: RunCorrelation,
}

impl EventEmitter {
    /// Create an emitter for a run, generating missing identifiers.
    pub fn new(thread_id: Option<String>, run_id: Option<String>) -> Self {
        Self {
            correlation: RunCorrelation::new(thread_id, run_id),
        }
    }

    /// Access the run's correlation state.
    pub fn correlation(&self) -> &RunCorrelation {
        &self.correlation
    }

    /// The `RUN_STARTED` event opening the sequence.
    pub fn run_started(&self) -> ProtocolEvent {
        ProtocolEvent::RunStarted {
            thread_id: self.correlation.thread_id().to_string(),
            run_id: self.correlation.run_id().to_string(),
            timestamp: now_millis(),
        }
    }

    /// An assistant text delta on the current message block.
    pub fn text_chunk(&self, delta: impl Into<String>) -> ProtocolEvent {
        ProtocolEvent::TextMessageChunk {
            message_id: self.correlation.current_message_id().to_string(),
            role: EventRole::Assistant,
            delta: delta.into(),
            timestamp: now_millis(),
        }
    }

    /// A tool call, or `None` if this call id was already emitted.
    ///
    /// Arguments are serialized to JSON as one atomic delta; absent arguments
    /// become `"{}"`.
    pub fn tool_call(
        &mut self,
        tool_call_id: Option<&str>,
        tool_call_name: &str,
        arguments: Option<serde_json::Value>,
        is_frontend: bool,
    ) -> Option<ProtocolEvent> {
        let call_id = match self.correlation.record_tool_call(tool_call_id, is_frontend) {
            ToolCallRecord::Emitted { call_id } => call_id,
            ToolCallRecord::AlreadySeen => return None,
        };

        let args_json = match arguments {
            Some(value) => serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string()),
            None => "{}".to_string(),
        };

        Some(ProtocolEvent::ToolCallChunk {
            tool_call_id: call_id,
            tool_call_name: tool_call_name.to_string(),
            parent_message_id: self.correlation.current_message_id().to_string(),
            delta: args_json,
            timestamp: now_millis(),
        })
    }

    /// A tool result, or `None` when correlation is impossible or the call
    /// belongs to a frontend tool (the client already has the result).
    ///
    /// Absent results serialize to `"null"`. The event gets its own freshly
    /// generated message id; the run's current message id advances so the
    /// next assistant text starts a new block.
    pub fn tool_result(
        &mut self,
        tool_call_id: Option<&str>,
        result: Option<serde_json::Value>,
    ) -> Option<ProtocolEvent> {
        let (call_id, message_id) = match self.correlation.record_tool_result(tool_call_id) {
            ToolResultRecord::Emit {
                call_id,
                message_id,
            } => (call_id, message_id),
            ToolResultRecord::Uncorrelated | ToolResultRecord::Frontend => return None,
        };

        let content = match result {
            Some(value) => serde_json::to_string(&value).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        };

        Some(ProtocolEvent::ToolCallResult {
            message_id,
            tool_call_id: call_id,
            content,
            role: EventRole::Tool,
            timestamp: now_millis(),
        })
    }

    /// A `RUN_ERROR` event for a mid-stream failure.
    pub fn run_error(&self, message: impl Into<String>, code: Option<&str>) -> ProtocolEvent {
        ProtocolEvent::RunError {
            message: message.into(),
            code: code.map(str::to_string),
            timestamp: now_millis(),
        }
    }

    /// The terminal `RUN_FINISHED` event.
    ///
    /// Outcome priority: a captured error wins, then pending frontend tool
    /// calls interrupt the run, otherwise success.
    pub fn run_finished(&self, error: Option<&AgentWireError>) -> ProtocolEvent {
        let outcome = if error.is_some() {
            RunOutcome::Error
        } else if self.correlation.has_frontend_calls() {
            RunOutcome::Interrupt
        } else {
            RunOutcome::Success
        };

        let interrupt = (outcome == RunOutcome::Interrupt).then(|| InterruptInfo {
            id: Uuid::new_v4().to_string(),
            reason: "tool_execution".to_string(),
        });

        ProtocolEvent::RunFinished {
            thread_id: self.correlation.thread_id().to_string(),
            run_id: self.correlation.run_id().to_string(),
            outcome,
            interrupt,
            timestamp: now_millis(),
        }
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
