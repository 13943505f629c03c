//! agentwire — agent-to-client event streaming protocol engine.
//!
//! Consumes an AI agent's incremental generation output (text deltas, tool
//! invocations, tool results) and converts it into a well-formed, strictly
//! ordered sequence of protocol events suitable for delivery to a browser
//! over a persistent SSE connection.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use futures::StreamExt;
//! use tokio_util::sync::CancellationToken;
//! use agentwire::protocol::{FrontendToolSet, RunAgentRequest};
//! use agentwire::run::stream_run;
//!
//! # async fn example(agent: Arc<dyn agentwire::agent::StreamingAgent>) {
//! let request = RunAgentRequest::builder().messages(vec![]).build();
//! let mut events = stream_run(
//!     agent,
//!     request,
//!     FrontendToolSet::default(),
//!     CancellationToken::new(),
//! );
//! while let Some(event) = events.next().await {
//!     println!("{}", event.event_type());
//! }
//! # }
//! ```

pub mod agent;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod run;
pub mod sse;
pub mod types;
