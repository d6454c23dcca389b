// src/application/problem.rs
use crate::application::{
    registry::ErrorTypeRegistry,
    response::{ResultResponse, ResultResponseError},
};
use crate::domain::contract::{ContractError, ContractResult};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// RFC 7807 style failure payload. Extensions are flattened into the
/// top-level object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub type_uri: Option<String>,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub instance: Option<String>,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl ProblemDetails {
    pub fn from_error(error: &ResultResponseError, registry: &ErrorTypeRegistry) -> Self {
        let mapping = registry.mapping(error.kind());

        let mut extensions = Map::new();
        extensions.insert("isSuccess".into(), Value::Bool(false));
        extensions.insert(
            "errors".into(),
            Value::Array(error.errors().iter().cloned().map(Value::String).collect()),
        );

        Self {
            type_uri: type_uri_for(mapping.status).map(str::to_string),
            title: mapping.title,
            status: mapping.status.as_u16(),
            detail: error.errors().join("\n"),
            instance: None,
            extensions,
        }
    }

    /// Fails for a success response: there is nothing to describe.
    pub fn from_response<T>(
        response: &ResultResponse<T>,
        registry: &ErrorTypeRegistry,
    ) -> ContractResult<Self> {
        response
            .as_error()
            .map(|error| Self::from_error(error, registry))
            .ok_or(ContractError::NotAFailure)
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.extensions
            .get("errors")
            .and_then(Value::as_array)
            .map(|errors| errors.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

fn type_uri_for(status: StatusCode) -> Option<&'static str> {
    let uri = match status.as_u16() {
        400 => "https://tools.ietf.org/html/rfc9110#section-15.5.1",
        401 => "https://tools.ietf.org/html/rfc9110#section-15.5.2",
        403 => "https://tools.ietf.org/html/rfc9110#section-15.5.4",
        404 => "https://tools.ietf.org/html/rfc9110#section-15.5.5",
        405 => "https://tools.ietf.org/html/rfc9110#section-15.5.6",
        406 => "https://tools.ietf.org/html/rfc9110#section-15.5.7",
        408 => "https://tools.ietf.org/html/rfc9110#section-15.5.9",
        409 => "https://tools.ietf.org/html/rfc9110#section-15.5.10",
        412 => "https://tools.ietf.org/html/rfc9110#section-15.5.13",
        415 => "https://tools.ietf.org/html/rfc9110#section-15.5.16",
        422 => "https://tools.ietf.org/html/rfc9110#section-15.5.21",
        426 => "https://tools.ietf.org/html/rfc9110#section-15.5.22",
        500 => "https://tools.ietf.org/html/rfc9110#section-15.6.1",
        502 => "https://tools.ietf.org/html/rfc9110#section-15.6.3",
        503 => "https://tools.ietf.org/html/rfc9110#section-15.6.4",
        504 => "https://tools.ietf.org/html/rfc9110#section-15.6.5",
        _ => return None,
    };
    Some(uri)
}
