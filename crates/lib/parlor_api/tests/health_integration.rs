//! Integration test — root and diagnostic endpoints never fail, whatever
//! state the store is in.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use parlor_api::{AppState, config::ApiConfig};
use parlor_core::conversations::ConversationService;
use parlor_core::store::{ConversationStore, MemoryConversationStore, UnconfiguredStore};
use tower::ServiceExt;

async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let app = parlor_api::router(state);
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&body).expect("parse JSON"))
}

fn state(store: Arc<dyn ConversationStore>, config: ApiConfig) -> AppState {
    AppState {
        conversations: ConversationService::new(store),
        config,
    }
}

#[tokio::test]
async fn root_reports_running() {
    let (status, json) = get_json(
        state(Arc::new(MemoryConversationStore::new()), ApiConfig::default()),
        "/",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "AI Chat Backend running");
}

#[tokio::test]
async fn diagnostic_with_working_store() {
    let config = ApiConfig {
        database_url: Some("postgres://example/parlor".into()),
        ..ApiConfig::default()
    };
    let (status, json) =
        get_json(state(Arc::new(MemoryConversationStore::new()), config), "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["connection_status"], "Connected");
    assert_eq!(json["database"], "✅ Connected & Working");
    assert_eq!(json["database_url"], "✅ Set");
    assert_eq!(json["database_name"], "❌ Not Set");
    assert_eq!(json["collections"], serde_json::json!(["conversation"]));
}

#[tokio::test]
async fn diagnostic_with_offline_store_still_succeeds() {
    let store = Arc::new(MemoryConversationStore::new());
    store.set_available(false);
    let (status, json) = get_json(state(store, ApiConfig::default()), "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["connection_status"], "Not Connected");
    assert!(json["database"].as_str().unwrap().starts_with("❌ Error"));
}

#[tokio::test]
async fn diagnostic_without_database() {
    let (status, json) = get_json(
        state(Arc::new(UnconfiguredStore), ApiConfig::default()),
        "/test",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["connection_status"], "Not Connected");
    assert_eq!(json["database_url"], "❌ Not Set");
    assert_eq!(json["collections"], serde_json::json!([]));
}
