// src/presentation/http/routes.rs
use crate::presentation::http::controllers::items;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::get,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/items",
            get(items::list_items).post(items::create_item),
        )
        .route(
            "/api/v1/items/{id}",
            get(items::get_item).delete(items::delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
