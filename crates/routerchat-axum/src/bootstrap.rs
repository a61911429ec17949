//! Axum server bootstrap - the composition root.
//!
//! This is the only place where infrastructure is wired together for the
//! web adapter: the API key is loaded once here and the OpenRouter client
//! is built from it. A missing key fails startup instead of failing every
//! request later.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use routerchat_openrouter::{DefaultOpenRouterClient, OpenRouterConfig, load_api_key};

use crate::routes::{create_router, create_spa_router};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Optional override of the upstream API base URL.
    pub base_url: Option<String>,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default settings.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            port: 5000,
            base_url: None,
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Override the upstream API base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The OpenRouter client shared by all handlers.
    pub client: Arc<DefaultOpenRouterClient>,
}

/// Bootstrap the Axum server context.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let api_key = load_api_key().context("failed to load OpenRouter API key")?;

    let mut client_config = OpenRouterConfig::new();
    if let Some(base_url) = &config.base_url {
        client_config = client_config.with_base_url(base_url.clone());
    }

    tracing::info!("OpenRouter API key loaded");
    Ok(AxumContext {
        client: Arc::new(DefaultOpenRouterClient::new(&client_config, api_key)),
    })
}

/// Bootstrap and run the server until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;

    let router = match &config.static_dir {
        Some(static_dir) => {
            tracing::info!(static_dir = %static_dir.display(), "serving frontend assets");
            create_spa_router(ctx, static_dir, &config.cors)
        }
        None => create_router(ctx, &config.cors),
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router).await?;
    Ok(())
}
