//! Server-sent-events framing at the transport boundary.
//!
//! Each protocol event is serialized to JSON and wrapped as
//! `data: <json>\n\n`. Delivery is real-time: the writer flushes after every
//! individual event, never buffering more than one.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::Result;
use crate::protocol::ProtocolEvent;

/// Response headers for an event-stream connection.
pub const CONTENT_TYPE: &str = "text/event-stream";
pub const CACHE_CONTROL: &str = "no-cache";
pub const CONNECTION: &str = "keep-alive";

/// Serialize one event into an SSE frame.
pub fn frame(event: &ProtocolEvent) -> Result<String> {
    let json = serde_json::to_string(event)?;
    Ok(format!("data: {json}\n\n"))
}

/// Write one event to the outbound stream and flush immediately.
pub async fn write_event<W>(writer: &mut W, event: &ProtocolEvent) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let frame = frame(event)?;
    writer.write_all(frame.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_event() -> ProtocolEvent {
        ProtocolEvent::RunStarted {
            thread_id: "t-1".into(),
            run_id: "r-1".into(),
            timestamp: 1700000000000,
        }
    }

    #[test]
    fn frame_wraps_json_with_data_prefix_and_blank_line() {
        let framed = frame(&sample_event()).unwrap();
        assert!(framed.starts_with("data: {"));
        assert!(framed.ends_with("\n\n"));

        let json = framed
            .strip_prefix("data: ")
            .unwrap()
            .strip_suffix("\n\n")
            .unwrap();
        let back: ProtocolEvent = serde_json::from_str(json).unwrap();
        assert_eq!(back, sample_event());
    }

    #[tokio::test]
    async fn write_event_appends_one_frame() {
        let mut sink: Vec<u8> = Vec::new();
        write_event(&mut sink, &sample_event()).await.unwrap();
        let written = String::from_utf8(sink).unwrap();
        assert_eq!(written, frame(&sample_event()).unwrap());
    }

    #[tokio::test]
    async fn write_event_keeps_frames_separated() {
        let mut sink: Vec<u8> = Vec::new();
        write_event(&mut sink, &sample_event()).await.unwrap();
        write_event(&mut sink, &sample_event()).await.unwrap();
        let written = String::from_utf8(sink).unwrap();
        assert_eq!(written.matches("data: ").count(), 2);
        assert_eq!(written.matches("\n\n").count(), 2);
    }
}
