//! Core types shared across the engine.

pub mod message;
pub mod update;

pub use message::{AgentToolCall, AgentToolResult, ContentPart, ModelMessage, Role};
pub use update::{AgentUpdate, ContentFragment};
