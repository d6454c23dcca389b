// src/presentation/http/render.rs
use crate::application::{
    matcher::{Matcher, RenderResponse},
    problem::{APPLICATION_PROBLEM_JSON, ProblemDetails},
    response::ResultResponse,
};
use crate::domain::{contract::ContractResult, outcome::Outcome};
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Serialize;

impl RenderResponse for Response {
    fn render<B: Serialize>(status: StatusCode, body: &B) -> ContractResult<Self> {
        Ok((status, Json(body)).into_response())
    }

    fn render_problem(problem: ProblemDetails) -> ContractResult<Self> {
        Ok(problem.into_response())
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self)).into_response();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_PROBLEM_JSON));
        response
    }
}

/// Handlers may return an `Outcome` directly; it is rendered through the
/// process-wide configuration with no explicit handlers.
impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        Matcher::<Response>::global()
            .render_outcome(self, None)
            .unwrap_or_else(IntoResponse::into_response)
    }
}

impl<T: Serialize> IntoResponse for ResultResponse<T> {
    fn into_response(self) -> Response {
        Matcher::<Response>::global()
            .render(self, None)
            .unwrap_or_else(IntoResponse::into_response)
    }
}
