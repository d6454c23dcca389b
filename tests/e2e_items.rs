use axum::http::{Method, StatusCode};
use result_response::application::configuration::ResultConfig;
use result_response::domain::error_kind::ErrorKind;
use serde_json::json;
use std::sync::Arc;

mod support;

#[tokio::test]
async fn e2e_health_returns_ok() {
    let app = support::make_test_router();
    let resp = support::send(&app, Method::GET, "/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::json_body(resp).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn e2e_create_then_get_item() {
    let app = support::make_test_router();

    let resp = support::send(
        &app,
        Method::POST,
        "/api/v1/items",
        Some(json!({ "name": "bolt", "quantity": 5 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = support::json_body(resp).await;
    assert_eq!(created, json!({ "id": 1, "name": "bolt", "quantity": 5 }));

    let resp = support::send(&app, Method::GET, "/api/v1/items/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::json_body(resp).await["name"], "bolt");
}

#[tokio::test]
async fn e2e_missing_item_returns_problem_404() {
    let app = support::make_test_router();
    let resp = support::send(&app, Method::GET, "/api/v1/items/42", None).await;
    let body = support::assert_problem_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(body["detail"], "item 42 does not exist");
}

#[tokio::test]
async fn e2e_missing_item_plain_body_when_requested() {
    let app = support::make_test_router();
    let resp = support::send(
        &app,
        Method::GET,
        "/api/v1/items/42?problem_details=false",
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(support::content_type(&resp).starts_with("application/json"));
    assert_eq!(
        support::json_body(resp).await,
        json!({ "isSuccess": false, "errors": ["item 42 does not exist"], "type": "NotFound" })
    );
}

#[tokio::test]
async fn e2e_configured_default_switches_rendering_style() {
    let config = Arc::new(ResultConfig::default());
    config.set_use_problem_details_by_default(false);
    let app = support::make_test_router_with_config(config);

    let resp = support::send(&app, Method::DELETE, "/api/v1/items/3", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(support::json_body(resp).await["type"], "NotFound");
}

#[tokio::test]
async fn e2e_duplicate_name_returns_conflict() {
    let app = support::make_test_router();
    let payload = json!({ "name": "nut", "quantity": 1 });

    let first = support::send(&app, Method::POST, "/api/v1/items", Some(payload.clone())).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = support::send(&app, Method::POST, "/api/v1/items", Some(payload)).await;
    let body = support::assert_problem_response(second, StatusCode::CONFLICT, "Conflict").await;
    assert_eq!(body["detail"], "an item named 'nut' already exists");
}

#[tokio::test]
async fn e2e_invalid_payload_returns_validation_problem() {
    let app = support::make_test_router();
    let resp = support::send(
        &app,
        Method::POST,
        "/api/v1/items",
        Some(json!({ "name": "", "quantity": 0 })),
    )
    .await;
    let body =
        support::assert_problem_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(
        body["errors"],
        json!(["name must be 1-64 characters", "quantity must be between 1 and 10000"])
    );
    assert_eq!(
        body["detail"],
        "name must be 1-64 characters\nquantity must be between 1 and 10000"
    );
}

#[tokio::test]
async fn e2e_invalid_payload_follows_router_config() {
    let config = Arc::new(ResultConfig::default());
    config.set_use_problem_details_by_default(false);
    let app = support::make_test_router_with_config(config);

    let resp = support::send(
        &app,
        Method::POST,
        "/api/v1/items",
        Some(json!({ "name": "", "quantity": 0 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(support::content_type(&resp).starts_with("application/json"));
    assert_eq!(
        support::json_body(resp).await,
        json!({
            "isSuccess": false,
            "errors": ["name must be 1-64 characters", "quantity must be between 1 and 10000"],
            "type": "Validation"
        })
    );
}

#[tokio::test]
async fn e2e_malformed_json_uses_router_registry() {
    let config = Arc::new(ResultConfig::default());
    config.registry().register(
        ErrorKind::VALIDATION,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    );
    let app = support::make_test_router_with_config(config);

    let resp = support::send(&app, Method::POST, "/api/v1/items", Some(json!({ "name": 7 }))).await;
    support::assert_problem_response(resp, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity")
        .await;
}

#[tokio::test]
async fn e2e_malformed_json_is_a_validation_failure() {
    let app = support::make_test_router();
    let resp = support::send(&app, Method::POST, "/api/v1/items", Some(json!({ "name": 7 }))).await;
    support::assert_problem_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn e2e_list_returns_result_response_envelope() {
    let app = support::make_test_router();
    support::send(
        &app,
        Method::POST,
        "/api/v1/items",
        Some(json!({ "name": "washer", "quantity": 3 })),
    )
    .await;

    let resp = support::send(&app, Method::GET, "/api/v1/items", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        support::json_body(resp).await,
        json!({ "isSuccess": true, "data": [{ "id": 1, "name": "washer", "quantity": 3 }] })
    );
}

#[tokio::test]
async fn e2e_delete_returns_no_content_then_404() {
    let app = support::make_test_router();
    support::send(
        &app,
        Method::POST,
        "/api/v1/items",
        Some(json!({ "name": "gear", "quantity": 2 })),
    )
    .await;

    let resp = support::send(&app, Method::DELETE, "/api/v1/items/1", None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = support::send(&app, Method::DELETE, "/api/v1/items/1", None).await;
    support::assert_problem_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}
