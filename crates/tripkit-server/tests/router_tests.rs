//! Router smoke tests. Nothing here touches the network: only routes that
//! stay inside the process are exercised.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::util::ServiceExt;
use tripkit_core::LlmServiceConfig;
use tripkit_server::server::build_router;
use tripkit_server::{AppState, ServerConfig};

fn test_state() -> Arc<AppState> {
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        openweather_api_key: "test-key".to_string(),
        llm: LlmServiceConfig {
            url: "http://127.0.0.1:1".to_string(),
            model: "test-model".to_string(),
            embedding_model: "test-embedder".to_string(),
            embedding_dimensions: Some(4),
            api_key: None,
            timeout_secs: 1,
        },
    };
    Arc::new(AppState::new(config).expect("state construction is offline"))
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let app = build_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = build_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
