//! HTTP backend abstraction for the OpenRouter API.
//!
//! The backend trait is the seam that lets tests feed canned JSON responses
//! and canned SSE byte streams through the real client code. The production
//! implementation is reqwest with bearer authentication. There is no retry
//! logic: every failure is terminal for the request that triggered it.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use serde_json::Value;

use crate::config::OpenRouterConfig;
use crate::error::{OpenRouterError, OpenRouterResult};

/// Owned stream of raw response bytes from a streaming request.
pub type ByteStream = BoxStream<'static, OpenRouterResult<Bytes>>;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends speaking to the upstream API.
///
/// This is an implementation detail of `OpenRouterClient`; external code
/// only sees it as the client's generic parameter.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and return the JSON body.
    async fn get_json(&self, url: &str) -> OpenRouterResult<Value>;

    /// POST a JSON body and return the JSON response.
    async fn post_json(&self, url: &str, body: &Value) -> OpenRouterResult<Value>;

    /// POST a JSON body and return the raw response byte stream.
    async fn post_stream(&self, url: &str, body: &Value) -> OpenRouterResult<ByteStream>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with bearer authentication.
pub struct ReqwestBackend {
    client: reqwest::Client,
    api_key: String,
    catalog_timeout: std::time::Duration,
    chat_timeout: std::time::Duration,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &OpenRouterConfig, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            api_key,
            catalog_timeout: config.catalog_timeout,
            chat_timeout: config.chat_timeout,
        }
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    fn map_transport(err: reqwest::Error) -> OpenRouterError {
        if err.is_timeout() {
            OpenRouterError::Timeout
        } else {
            err.into()
        }
    }

    /// Turn a non-success response into an `Api` error, pulling the message
    /// out of the upstream JSON error body when there is one.
    async fn check_status(response: reqwest::Response) -> OpenRouterResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        Err(OpenRouterError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json(&self, url: &str) -> OpenRouterResult<Value> {
        let response = self
            .authed(self.client.get(url))
            .timeout(self.catalog_timeout)
            .send()
            .await
            .map_err(Self::map_transport)?;
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Self::map_transport)
    }

    async fn post_json(&self, url: &str, body: &Value) -> OpenRouterResult<Value> {
        let response = self
            .authed(self.client.post(url))
            .timeout(self.chat_timeout)
            .json(body)
            .send()
            .await
            .map_err(Self::map_transport)?;
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Self::map_transport)
    }

    async fn post_stream(&self, url: &str, body: &Value) -> OpenRouterResult<ByteStream> {
        // No total timeout here: a healthy relay may outlive any fixed bound.
        let response = self
            .authed(self.client.post(url))
            .json(body)
            .send()
            .await
            .map_err(Self::map_transport)?;
        let response = Self::check_status(response).await?;
        Ok(response
            .bytes_stream()
            .map(|result| result.map_err(Self::map_transport))
            .boxed())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
