//! Chat relay handlers.
//!
//! Both endpoints accept the same request body; the streaming variant
//! answers with an SSE body instead of a single JSON document. Relay
//! failures after the stream has opened arrive as in-stream error events,
//! since the 200 status is already on the wire by then.

use std::convert::Infallible;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use futures_util::StreamExt;
use routerchat_core::{ChatMessage, TokenUsage};
use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::handlers::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

impl ChatRequest {
    fn validate(&self) -> Result<(), HttpError> {
        if self.model.trim().is_empty() || self.message.trim().is_empty() {
            return Err(HttpError::BadRequest(
                "Model and message are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct ChatResponseBody {
    pub success: bool,
    pub response: String,
    pub usage: TokenUsage,
}

/// Non-streaming chat completion.
pub async fn chat(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponseBody>, HttpError> {
    request.validate()?;

    let reply = state
        .client
        .chat(&request.model, &request.message, &request.history)
        .await?;

    Ok(Json(ChatResponseBody {
        success: true,
        response: reply.content,
        usage: reply.usage,
    }))
}

/// Streaming chat completion, relayed as SSE.
pub async fn chat_stream(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Response, HttpError> {
    request.validate()?;

    let events = state
        .client
        .chat_stream(&request.model, &request.message, &request.history)
        .await;

    let frames = events.map(|event| Ok::<_, Infallible>(Bytes::from(event.to_frame())));

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .body(Body::from_stream(frames))
        .unwrap())
}
