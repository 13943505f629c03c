//! Run execution: correlation state, event emission, message conversion,
//! resume extraction, and the streaming orchestrator.

pub mod convert;
pub mod correlation;
pub mod emitter;
pub mod resume;
pub mod stream;

pub use correlation::{RunCorrelation, ToolCallRecord, ToolResultRecord};
pub use emitter::EventEmitter;
pub use stream::stream_run;
