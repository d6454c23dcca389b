// src/presentation/http/error.rs
use crate::domain::contract::ContractError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

/// Contract violations are bugs on the server side, so the client only sees
/// a generic 500; the details go to the log.
impl IntoResponse for ContractError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "result contract violated");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let payload = ErrorBody {
            error: status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.to_string(),
        };
        (status, Json(payload)).into_response()
    }
}

pub type HttpResult<T> = Result<T, ContractError>;
