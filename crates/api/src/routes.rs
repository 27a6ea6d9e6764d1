use crate::handlers;
use crate::state::AppState;
use axum::{http::StatusCode, routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .merge(handlers::local_records::routes())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found\n")
}
