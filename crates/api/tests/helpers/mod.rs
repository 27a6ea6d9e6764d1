#![allow(dead_code)]
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use dns_test_server_api::{create_api_routes, AppState};
use dns_test_server_infrastructure::repositories::InMemoryRecordStore;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_app() -> (Router, Arc<InMemoryRecordStore>) {
    let store = Arc::new(InMemoryRecordStore::new());
    let app = create_api_routes(AppState::for_store(store.clone()));
    (app, store)
}

pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
