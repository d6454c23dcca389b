// src/presentation/http/controllers/items.rs
use crate::application::response::ResultResponse;
use crate::domain::{
    item::{Item, NewItem},
    outcome::Outcome,
};
use crate::presentation::http::error::HttpResult;
use crate::presentation::http::extractors::ValidatedJson;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::typed::{JsonResult, ProblemResult, Results2};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 64, message = "name must be 1-64 characters"))]
    pub name: String,
    #[validate(range(min = 1, max = 10000, message = "quantity must be between 1 and 10000"))]
    pub quantity: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderParams {
    /// Overrides the configured failure rendering style for this request.
    #[serde(default)]
    pub problem_details: Option<bool>,
}

/// Success renders the bare item; failures fall back to the configured
/// rendering.
pub async fn get_item(
    Extension(state): Extension<HttpState>,
    Path(id): Path<u64>,
    Query(params): Query<RenderParams>,
) -> HttpResult<Response> {
    let response = state.items.find(id).await.into_result_response();
    state.matcher.match_success(
        response,
        |response| match response.data() {
            Some(item) => Json(item).into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        },
        params.problem_details,
    )
}

pub async fn list_items(Extension(state): Extension<HttpState>) -> Outcome<Vec<Item>> {
    Outcome::success(state.items.list().await)
}

/// Declares exactly which responses it can produce: `201` with the item, or
/// problem details.
pub async fn create_item(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<CreateItemRequest>,
) -> HttpResult<Results2<JsonResult, ProblemResult>> {
    let outcome = state
        .items
        .insert(NewItem {
            name: payload.name,
            quantity: payload.quantity,
        })
        .await;

    if let Some(item) = outcome.data() {
        tracing::info!(id = item.id, name = %item.name, "item created");
    }

    state.typed.match_success(
        outcome.into_result_response(),
        |response: ResultResponse<Item>| {
            Results2::First(JsonResult {
                status: StatusCode::CREATED,
                body: json!(response.data()),
            })
        },
        Some(true),
    )
}

pub async fn delete_item(
    Extension(state): Extension<HttpState>,
    Path(id): Path<u64>,
) -> HttpResult<Response> {
    let response = state.items.delete(id).await.into_result_response();
    state
        .matcher
        .match_success_async(
            response,
            |_| async move {
                tracing::info!(id, "item deleted");
                StatusCode::NO_CONTENT.into_response()
            },
            None,
        )
        .await
}
