//! Chat message types and the outbound context window.

use serde::{Deserialize, Serialize};

/// Number of trailing history messages forwarded as conversation context.
pub const HISTORY_WINDOW: usize = 6;

/// A single chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

fn default_role() -> String {
    "user".to_string()
}

impl ChatMessage {
    /// Build a user-role message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: default_role(),
            content: content.into(),
        }
    }
}

/// Token accounting reported by the upstream API.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// A successful non-streaming chat completion.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub content: String,
    pub usage: TokenUsage,
}

/// Assemble the message list sent upstream: the last [`HISTORY_WINDOW`]
/// history turns, then the new user message appended last.
#[must_use]
pub fn build_outbound_messages(history: &[ChatMessage], message: &str) -> Vec<ChatMessage> {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let mut messages: Vec<ChatMessage> = history[start..].to_vec();
    messages.push(ChatMessage::user(message));
    messages
}
