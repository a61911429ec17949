//! Wire types for the OpenRouter API.
//!
//! These are internal: raw catalog records are enriched into
//! `routerchat_core::ModelRecord` before leaving this crate, and chat
//! responses are reduced to `ChatReply`.

use routerchat_core::{ChatMessage, TokenUsage};
use serde::Deserialize;

/// Envelope of `GET /models`.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Vec<RawModel>,
}

/// One catalog record as the upstream sends it. Everything except the id is
/// optional in practice, so every field defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawModel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub context_length: Option<u64>,
    /// Unix timestamp; zero and absent both mean unknown.
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub pricing: RawPricing,
    #[serde(default)]
    pub architecture: RawArchitecture,
    #[serde(default)]
    pub top_provider: RawTopProvider,
    #[serde(default)]
    pub supported_parameters: Vec<String>,
    #[serde(default)]
    pub hugging_face_id: String,
    #[serde(default)]
    pub canonical_slug: String,
    #[serde(default)]
    pub per_request_limits: Option<serde_json::Value>,
}

/// Prices arrive as decimal strings; missing prices count as zero.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPricing {
    #[serde(default = "zero_price")]
    pub prompt: String,
    #[serde(default = "zero_price")]
    pub completion: String,
}

impl Default for RawPricing {
    fn default() -> Self {
        Self {
            prompt: zero_price(),
            completion: zero_price(),
        }
    }
}

fn zero_price() -> String {
    "0".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArchitecture {
    #[serde(default)]
    pub modality: Option<String>,
    #[serde(default)]
    pub input_modalities: Vec<String>,
    #[serde(default)]
    pub output_modalities: Vec<String>,
    #[serde(default)]
    pub tokenizer: Option<String>,
    #[serde(default)]
    pub instruct_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTopProvider {
    #[serde(default)]
    pub max_completion_tokens: Option<u64>,
    #[serde(default)]
    pub is_moderated: bool,
}

/// Non-streaming chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}
