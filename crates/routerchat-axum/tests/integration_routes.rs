//! Integration tests for the Axum web server.
//!
//! These tests verify that routes are correctly wired to handlers. The
//! OpenRouter client points at an unroutable address, so catalog requests
//! exercise the fallback list and chat requests exercise error mapping.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use routerchat_axum::bootstrap::{AxumContext, CorsConfig};
use routerchat_axum::routes::create_router;
use routerchat_openrouter::{DefaultOpenRouterClient, OpenRouterConfig};

fn test_context() -> AxumContext {
    let config = OpenRouterConfig::new()
        .with_base_url("http://127.0.0.1:9/api/v1")
        .with_catalog_timeout(std::time::Duration::from_secs(1))
        .with_chat_timeout(std::time::Duration::from_secs(1));
    AxumContext {
        client: Arc::new(DefaultOpenRouterClient::new(&config, "test-key".to_string())),
    }
}

fn app() -> axum::Router {
    create_router(test_context(), &CorsConfig::AllowAll)
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_i64());
}

#[tokio::test]
async fn models_endpoint_serves_fallback_catalog() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/models")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 4);
    assert_eq!(body["price_filter"], "all");
    for model in body["models"].as_array().unwrap() {
        assert_eq!(model["pricing"]["is_free"], true);
    }
}

#[tokio::test]
async fn models_endpoint_applies_price_filter() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/models?price=paid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["price_filter"], "paid");
}

#[tokio::test]
async fn categories_endpoint_returns_labelled_entries() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let categories = body["categories"].as_array().unwrap();
    assert!(!categories.is_empty());
    for entry in categories {
        assert!(entry["value"].is_string());
        assert!(entry["label"].is_string());
    }
}

#[tokio::test]
async fn chat_rejects_missing_fields() {
    let response = app()
        .oneshot(json_request("/api/chat", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Model and message are required");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn chat_stream_rejects_missing_fields() {
    let response = app()
        .oneshot(json_request(
            "/api/chat/stream",
            json!({"model": "  ", "message": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Model and message are required");
}

#[tokio::test]
async fn malformed_json_body_gets_error_envelope() {
    for uri in ["/api/chat", "/api/chat/stream"] {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["status"], 400);
        assert!(!body["error"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn chat_with_unreachable_upstream_is_client_visible_error() {
    let response = app()
        .oneshot(json_request(
            "/api/chat",
            json!({"model": "acme/test", "message": "hello"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn chat_stream_failure_arrives_as_sse_error_event() {
    let response = app()
        .oneshot(json_request(
            "/api/chat/stream",
            json!({"model": "acme/test", "message": "hello"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/event-stream"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.starts_with("data: "));
    assert!(text.contains("\"error\""));
}

#[tokio::test]
async fn unknown_api_route_is_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
