//! Convenience re-exports for common usage.

pub use crate::agent::{StreamingAgent, UpdateStream};
pub use crate::error::{AgentWireError, Result};
pub use crate::protocol::{
    FrontendToolSet, ProtocolEvent, ResumeInfo, RunAgentRequest, RunOutcome, WireMessage, WireRole,
};
pub use crate::run::stream_run;
pub use crate::types::{AgentUpdate, ContentFragment, ModelMessage, Role};
