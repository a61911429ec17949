//! OpenRouter API client.

use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use routerchat_core::{ChatMessage, ChatReply, ModelRecord, build_outbound_messages};
use serde_json::{Value, json};

use crate::api::{CatalogResponse, ChatCompletionResponse};
use crate::config::OpenRouterConfig;
use crate::enrich::{enrich_model, fallback_models};
use crate::error::{OpenRouterError, OpenRouterResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::stream::{RelayEvent, relay};

/// Completion token cap sent on every chat request.
const MAX_COMPLETION_TOKENS: u32 = 1000;

/// Sampling temperature sent on every chat request.
const TEMPERATURE: f64 = 0.7;

/// Client for the OpenRouter API, generic over the HTTP backend.
pub struct OpenRouterClient<B: HttpBackend> {
    backend: B,
    base_url: String,
}

/// The client with the production reqwest backend.
pub type DefaultOpenRouterClient = OpenRouterClient<ReqwestBackend>;

impl DefaultOpenRouterClient {
    /// Create a client with the reqwest backend and the given API key.
    #[must_use]
    pub fn new(config: &OpenRouterConfig, api_key: String) -> Self {
        Self {
            backend: ReqwestBackend::new(config, api_key),
            base_url: config.base_url.clone(),
        }
    }
}

impl<B: HttpBackend> OpenRouterClient<B> {
    #[cfg(test)]
    fn with_backend(backend: B, base_url: impl Into<String>) -> Self {
        Self {
            backend,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    fn chat_body(model: &str, message: &str, history: &[ChatMessage], stream: bool) -> Value {
        json!({
            "model": model,
            "messages": build_outbound_messages(history, message),
            "max_tokens": MAX_COMPLETION_TOKENS,
            "temperature": TEMPERATURE,
            "stream": stream,
        })
    }

    /// Fetch the enriched model catalog.
    ///
    /// Never fails: when the upstream catalog cannot be fetched or parsed,
    /// a static fallback of well-known free models is returned instead.
    pub async fn list_models(&self) -> Vec<ModelRecord> {
        match self.fetch_catalog().await {
            Ok(models) => models,
            Err(e) => {
                tracing::warn!(error = %e, "model catalog fetch failed, using fallback list");
                fallback_models()
            }
        }
    }

    async fn fetch_catalog(&self) -> OpenRouterResult<Vec<ModelRecord>> {
        let value = self.backend.get_json(&self.endpoint("models")).await?;
        let catalog: CatalogResponse = serde_json::from_value(value)?;
        tracing::debug!(count = catalog.data.len(), "fetched model catalog");
        Ok(catalog.data.iter().map(enrich_model).collect())
    }

    /// Send a non-streaming chat completion request.
    pub async fn chat(
        &self,
        model: &str,
        message: &str,
        history: &[ChatMessage],
    ) -> OpenRouterResult<ChatReply> {
        let body = Self::chat_body(model, message, history, false);
        let value = self
            .backend
            .post_json(&self.endpoint("chat/completions"), &body)
            .await?;
        let response: ChatCompletionResponse = serde_json::from_value(value)?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenRouterError::InvalidResponse {
                message: "response contained no choices".to_string(),
            })?;

        Ok(ChatReply {
            content: choice.message.content,
            usage: response.usage.unwrap_or_default(),
        })
    }

    /// Send a streaming chat completion request and relay the reply.
    ///
    /// A failure before the stream opens becomes a single `Error` event, so
    /// callers always get a stream to forward.
    pub async fn chat_stream(
        &self,
        model: &str,
        message: &str,
        history: &[ChatMessage],
    ) -> BoxStream<'static, RelayEvent> {
        let body = Self::chat_body(model, message, history, true);
        match self
            .backend
            .post_stream(&self.endpoint("chat/completions"), &body)
            .await
        {
            Ok(bytes) => relay(bytes).boxed(),
            Err(e) => {
                tracing::warn!(error = %e, "streaming chat request failed to open");
                let message = e.user_message();
                futures_util::stream::once(async move { RelayEvent::Error { message } }).boxed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use bytes::Bytes;

    const BASE: &str = "https://example.test/api/v1";

    fn client(backend: FakeBackend) -> OpenRouterClient<FakeBackend> {
        OpenRouterClient::with_backend(backend, BASE)
    }

    #[tokio::test]
    async fn list_models_enriches_catalog() {
        let backend = FakeBackend::new().with_response(
            "models",
            CannedResponse::Json(json!({
                "data": [{
                    "id": "deepseek/deepseek-chat:free",
                    "name": "DeepSeek Chat",
                    "description": "A coding model",
                    "context_length": 64000,
                    "created": 1717200000,
                    "pricing": {"prompt": "0", "completion": "0"},
                }]
            })),
        );

        let models = client(backend).list_models().await;
        assert_eq!(models.len(), 1);
        let model = &models[0];
        assert_eq!(model.provider, "deepseek");
        assert!(model.pricing.is_free);
        assert_eq!(model.created_date, "2024-06-01");
        assert!(model.categories.contains(&"code".to_string()));
    }

    #[tokio::test]
    async fn list_models_falls_back_on_upstream_error() {
        let backend = FakeBackend::new().with_response(
            "models",
            CannedResponse::Error {
                status: 500,
                message: "internal".to_string(),
            },
        );

        let models = client(backend).list_models().await;
        assert_eq!(models.len(), 4);
        assert!(models.iter().all(|m| m.pricing.is_free));
    }

    #[tokio::test]
    async fn chat_returns_first_choice_and_usage() {
        let backend = FakeBackend::new().with_response(
            "chat/completions",
            CannedResponse::Json(json!({
                "choices": [{"message": {"role": "assistant", "content": "Hi there"}}],
                "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15},
            })),
        );

        let reply = client(backend)
            .chat("acme/test", "hello", &[])
            .await
            .unwrap();
        assert_eq!(reply.content, "Hi there");
        assert_eq!(reply.usage.total_tokens, 15);
    }

    #[tokio::test]
    async fn chat_without_choices_is_invalid_response() {
        let backend = FakeBackend::new().with_response(
            "chat/completions",
            CannedResponse::Json(json!({"choices": []})),
        );

        let err = client(backend)
            .chat("acme/test", "hello", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, OpenRouterError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn chat_passes_upstream_error_message_through() {
        let backend = FakeBackend::new().with_response(
            "chat/completions",
            CannedResponse::Error {
                status: 402,
                message: "Insufficient credits".to_string(),
            },
        );

        let err = client(backend)
            .chat("acme/test", "hello", &[])
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Insufficient credits");
    }

    #[tokio::test]
    async fn chat_stream_relays_chunks_and_done() {
        let frames = vec![
            Ok(Bytes::from(
                "data: {\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n\n".to_string(),
            )),
            Ok(Bytes::from(
                "data: {\"choices\":[{\"delta\":{\"content\":\"lo\"}}]}\n\n".to_string(),
            )),
            Ok(Bytes::from("data: [DONE]\n\n".to_string())),
        ];
        let backend = FakeBackend::new().with_stream(frames);

        let events: Vec<_> = client(backend)
            .chat_stream("acme/test", "hello", &[])
            .await
            .collect()
            .await;
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[2],
            RelayEvent::Done {
                content: "Hello".to_string(),
                total_tokens: 2
            }
        );
    }

    #[tokio::test]
    async fn chat_stream_open_failure_is_single_error_event() {
        let backend = FakeBackend::new().with_response(
            "chat/completions",
            CannedResponse::Error {
                status: 401,
                message: "Invalid key".to_string(),
            },
        );

        let events: Vec<_> = client(backend)
            .chat_stream("acme/test", "hello", &[])
            .await
            .collect()
            .await;
        assert_eq!(
            events,
            vec![RelayEvent::Error {
                message: "Invalid key".to_string()
            }]
        );
    }
}
