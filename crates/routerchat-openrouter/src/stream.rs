//! Streaming chat relay.
//!
//! Upstream sends OpenAI-style SSE: `data: {json}` lines terminated by a
//! `data: [DONE]` sentinel. The relay parses those into a flat event stream
//! the web layer can re-frame for its own clients. Chunk boundaries from the
//! transport do not line up with line boundaries, so bytes are buffered and
//! split on newlines here.

use futures_util::{Stream, StreamExt};
use serde_json::{Value, json};

use crate::http::ByteStream;

/// One event produced by the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    /// A piece of assistant text.
    Chunk { content: String },
    /// End of the reply, with the full accumulated text.
    Done { content: String, total_tokens: u32 },
    /// Terminal failure; no further events follow.
    Error { message: String },
}

impl RelayEvent {
    /// JSON body of the event as sent to downstream clients.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Chunk { content } => json!({"type": "chunk", "content": content}),
            Self::Done {
                content,
                total_tokens,
            } => json!({
                "type": "done",
                "content": content,
                "usage": {"total_tokens": total_tokens},
            }),
            Self::Error { message } => json!({"error": message}),
        }
    }

    /// The event as a complete SSE frame.
    #[must_use]
    pub fn to_frame(&self) -> String {
        format!("data: {}\n\n", self.to_json())
    }
}

/// What one complete SSE line amounts to.
enum Line {
    Done,
    Delta(String),
}

/// Parse one complete line. Non-`data:` lines, malformed JSON and empty
/// deltas all come back as `None`.
fn parse_data_line(line: &[u8]) -> Option<Line> {
    let line = String::from_utf8_lossy(line);
    let payload = line.trim_end().strip_prefix("data:").map(str::trim_start)?;

    if payload == "[DONE]" {
        return Some(Line::Done);
    }

    let value = serde_json::from_str::<Value>(payload).ok()?;
    let content = value
        .pointer("/choices/0/delta/content")
        .and_then(Value::as_str)?;
    if content.is_empty() {
        return None;
    }
    Some(Line::Delta(content.to_string()))
}

/// Parse an upstream SSE byte stream into relay events.
///
/// Bytes are buffered and split on newlines, then decoded per complete line:
/// transport chunk boundaries can fall inside a multi-byte UTF-8 character,
/// so decoding must not happen before a line is whole. Malformed data lines
/// are skipped. A transport error ends the stream with a single `Error`
/// event. If the upstream closes without sending `[DONE]`, any unterminated
/// final line is still processed, and the stream ends without a `Done` event
/// unless that line carried the sentinel.
pub fn relay(upstream: ByteStream) -> impl Stream<Item = RelayEvent> + Send {
    async_stream::stream! {
        let mut upstream = upstream;
        let mut buffer: Vec<u8> = Vec::new();
        let mut accumulated = String::new();
        let mut total_tokens: u32 = 0;

        while let Some(result) = upstream.next().await {
            let bytes = match result {
                Ok(bytes) => bytes,
                Err(e) => {
                    yield RelayEvent::Error {
                        message: e.user_message(),
                    };
                    return;
                }
            };
            buffer.extend_from_slice(&bytes);

            while let Some(idx) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=idx).collect();
                match parse_data_line(&line) {
                    Some(Line::Done) => {
                        yield RelayEvent::Done {
                            content: std::mem::take(&mut accumulated),
                            total_tokens,
                        };
                        return;
                    }
                    Some(Line::Delta(content)) => {
                        accumulated.push_str(&content);
                        // Chunk count stands in for real token usage, which
                        // the streaming API does not report per delta.
                        total_tokens += 1;
                        yield RelayEvent::Chunk { content };
                    }
                    None => {}
                }
            }
        }

        // Upstream closed without terminating the last line
        if !buffer.is_empty() {
            match parse_data_line(&buffer) {
                Some(Line::Done) => {
                    yield RelayEvent::Done {
                        content: std::mem::take(&mut accumulated),
                        total_tokens,
                    };
                }
                Some(Line::Delta(content)) => {
                    yield RelayEvent::Chunk { content };
                }
                None => {}
            }
        }
    }
}
