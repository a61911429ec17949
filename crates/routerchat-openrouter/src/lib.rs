#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod api;
mod client;
mod config;
mod credentials;
mod enrich;
mod error;
mod http;
mod stream;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultOpenRouterClient, OpenRouterClient};

// Configuration and credentials
pub use config::OpenRouterConfig;
pub use credentials::{API_KEY_ENV, KEY_FILE_NAME, load_api_key};

// Errors
pub use error::{OpenRouterError, OpenRouterResult};

// HTTP backend seam (the generic parameter of `OpenRouterClient`)
pub use http::{ByteStream, HttpBackend, ReqwestBackend};

// Streaming relay events and the fallback catalog
pub use enrich::fallback_models;
pub use stream::RelayEvent;
