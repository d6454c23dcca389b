// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use result_response::application::configuration::ResultConfig;
use result_response::domain::item::ItemRepository;
use result_response::infrastructure::InMemoryItemRepository;
use result_response::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn make_test_router_with_config(config: Arc<ResultConfig>) -> axum::Router {
    let items: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::default());
    build_router(HttpState::new(items, config))
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with_config(Arc::new(ResultConfig::default()))
}

pub async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("router is infallible")
}

pub fn content_type(resp: &Response) -> String {
    resp.headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert a problem-details response with the expected status and title.
pub async fn assert_problem_response(
    resp: Response,
    expected_status: StatusCode,
    expected_title: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = content_type(&resp);
    assert!(ct.starts_with("application/problem+json"), "unexpected content-type: {}", ct);
    let json = json_body(resp).await;
    assert_eq!(json["title"], expected_title);
    assert_eq!(json["status"], expected_status.as_u16());
    assert_eq!(json["isSuccess"], false);
    assert!(
        json["errors"].as_array().is_some_and(|e| !e.is_empty()),
        "expected errors extension"
    );
    json
}
