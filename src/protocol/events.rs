//! Outbound protocol events.
//!
//! The closed set of events a run can emit, serialized with an explicit
//! `type` discriminator matching the AG-UI wire protocol. Event ordering is
//! produced by the streaming orchestrator; the variants here are plain data.

use serde::{Deserialize, Serialize};
use strum::Display;

/// A single transport-level protocol event.
///
/// Every variant carries a `timestamp` in epoch milliseconds. The sequence
/// for one run always starts with [`RunStarted`](Self::RunStarted) and ends
/// with exactly one [`RunFinished`](Self::RunFinished).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ProtocolEvent {
    #[serde(rename = "RUN_STARTED")]
    RunStarted {
        thread_id: String,
        run_id: String,
        timestamp: i64,
    },

    #[serde(rename = "TEXT_MESSAGE_CHUNK")]
    TextMessageChunk {
        message_id: String,
        role: EventRole,
        delta: String,
        timestamp: i64,
    },

    /// A tool invocation. `delta` is the JSON-serialized tool arguments,
    /// treated as a single atomic delta rather than incremental fragments.
    #[serde(rename = "TOOL_CALL_CHUNK")]
    ToolCallChunk {
        tool_call_id: String,
        tool_call_name: String,
        parent_message_id: String,
        delta: String,
        timestamp: i64,
    },

    #[serde(rename = "TOOL_CALL_RESULT")]
    ToolCallResult {
        message_id: String,
        tool_call_id: String,
        content: String,
        role: EventRole,
        timestamp: i64,
    },

    #[serde(rename = "RUN_ERROR")]
    RunError {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        timestamp: i64,
    },

    #[serde(rename = "RUN_FINISHED")]
    RunFinished {
        thread_id: String,
        run_id: String,
        outcome: RunOutcome,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interrupt: Option<InterruptInfo>,
        timestamp: i64,
    },
}

impl ProtocolEvent {
    /// The wire discriminator for this event.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::RunStarted { .. } => "RUN_STARTED",
            Self::TextMessageChunk { .. } => "TEXT_MESSAGE_CHUNK",
            Self::ToolCallChunk { .. } => "TOOL_CALL_CHUNK",
            Self::ToolCallResult { .. } => "TOOL_CALL_RESULT",
            Self::RunError { .. } => "RUN_ERROR",
            Self::RunFinished { .. } => "RUN_FINISHED",
        }
    }

    /// Whether this event terminates the run's sequence.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::RunFinished { .. })
    }
}

/// Role attached to message-bearing events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventRole {
    Assistant,
    Tool,
}

/// Terminal outcome of a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RunOutcome {
    Success,
    /// The run is suspended pending client-side tool execution and can be
    /// resumed with a resume payload.
    Interrupt,
    Error,
}

/// Interrupt details attached to a `RUN_FINISHED` event with
/// [`RunOutcome::Interrupt`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterruptInfo {
    pub id: String,
    pub reason: String,
}
