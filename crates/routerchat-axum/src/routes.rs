//! Route definitions and router construction.

use axum::Router;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under /api).
///
/// Returned without `.with_state()` applied; the caller supplies the state
/// before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/models", get(handlers::models::list))
        .route("/categories", get(handlers::models::list_categories))
        .route("/chat", post(handlers::chat::chat))
        .route("/chat/stream", post(handlers::chat::chat_stream))
        .route("/health", get(handlers::health::health))
}

/// Create the main Axum router with all API routes.
///
/// API routes only; for serving static assets use [`create_spa_router`],
/// which adds static file serving with SPA fallback.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new().nest("/api", api_routes().with_state(state).layer(cors))
}

/// Create a router with API routes and static asset serving.
///
/// Serves API routes under `/api/*`, static assets from `static_dir` for
/// matching files, and falls back to `index.html` for client-side routing.
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let static_path = static_dir.as_ref();
    let index_path = static_path.join("index.html");

    // ServeDir with a ServeFile fallback returns index.html for missing paths
    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(&index_path));

    // API routes keep their own 404s for unknown /api paths
    let api = create_router(ctx, cors_config);

    api.fallback_service(serve_dir)
}
