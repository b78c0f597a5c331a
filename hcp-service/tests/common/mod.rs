#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use hcp_service::startup::{build_router, AppState};
use service_core::store::{DocumentStore, InMemoryStore};
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn app_with(store: impl DocumentStore + 'static) -> Router {
    build_router(AppState {
        store: Arc::new(store),
    })
}

pub fn app_with_empty_store() -> Router {
    app_with(InMemoryStore::new())
}

/// Sends a GET to `uri` and returns the status and parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).expect("Failed to parse JSON");
    (status, body)
}
