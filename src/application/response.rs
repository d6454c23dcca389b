// src/application/response.rs
use crate::domain::{error::Error, error_kind::ErrorKind, outcome::Outcome};
use serde::Serialize;

/// Flat, framework-neutral projection of an [`Outcome`]; this is what the
/// matcher branches on and what ends up serialized in response bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultResponse<T = ()> {
    Success(ResultResponseSuccess<T>),
    Error(ResultResponseError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponseSuccess<T = ()> {
    is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponseError {
    is_success: bool,
    errors: Vec<String>,
    #[serde(rename = "type")]
    kind: ErrorKind,
}

impl<T> ResultResponseSuccess<T> {
    pub fn new(data: Option<T>) -> Self {
        Self {
            is_success: true,
            data,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl ResultResponseError {
    pub fn new(errors: Vec<String>, kind: ErrorKind) -> Self {
        Self {
            is_success: false,
            errors,
            kind,
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<&Error> for ResultResponseError {
    fn from(error: &Error) -> Self {
        Self::new(error.list_descriptions(), error.kind().clone())
    }
}

impl ResultResponse<()> {
    /// A payload-less success, as produced for `Outcome<()>` by callers that
    /// do not want a `data` field.
    pub fn empty_success() -> Self {
        Self::Success(ResultResponseSuccess::new(None))
    }
}

impl<T> ResultResponse<T> {
    pub fn success(data: T) -> Self {
        Self::Success(ResultResponseSuccess::new(Some(data)))
    }

    pub fn error(errors: Vec<String>, kind: ErrorKind) -> Self {
        Self::Error(ResultResponseError::new(errors, kind))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(success) => success.data(),
            Self::Error(_) => None,
        }
    }

    /// Error descriptions; empty on success.
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success(_) => &[],
            Self::Error(error) => error.errors(),
        }
    }

    pub fn kind(&self) -> Option<&ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error.kind()),
        }
    }

    pub fn as_error(&self) -> Option<&ResultResponseError> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    pub fn map_data<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<ResultResponse<U>, E> {
        Ok(match self {
            Self::Success(success) => ResultResponse::Success(ResultResponseSuccess::new(
                success.into_data().map(f).transpose()?,
            )),
            Self::Error(error) => ResultResponse::Error(error),
        })
    }
}

impl<T: Clone> Outcome<T> {
    pub fn to_response(&self) -> ResultResponse<T> {
        match self {
            Outcome::Success(data) => ResultResponse::success(data.clone()),
            Outcome::Failure(error) => ResultResponse::Error(error.into()),
        }
    }
}

impl<T> Outcome<T> {
    pub fn into_result_response(self) -> ResultResponse<T> {
        match self {
            Outcome::Success(data) => ResultResponse::success(data),
            Outcome::Failure(error) => ResultResponse::Error((&error).into()),
        }
    }
}

impl<T> From<Outcome<T>> for ResultResponse<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_projects_descriptions_and_kind() {
        let outcome: Outcome = Outcome::failure(Error::validation("E1", "bad"));
        let response = outcome.to_response();

        assert!(!response.is_success());
        assert_eq!(response.errors(), ["bad".to_string()]);
        assert_eq!(response.kind(), Some(&ErrorKind::VALIDATION));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "isSuccess": false, "errors": ["bad"], "type": "Validation" })
        );
    }

    #[test]
    fn typed_success_keeps_data() {
        let response = Outcome::success(vec![1, 2, 3]).to_response();
        assert!(response.is_success());
        assert_eq!(response.data(), Some(&vec![1, 2, 3]));
        assert!(response.errors().is_empty());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "isSuccess": true, "data": [1, 2, 3] })
        );
    }

    #[test]
    fn empty_success_omits_data() {
        let response = ResultResponse::empty_success();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "isSuccess": true })
        );
    }

    #[test]
    fn map_data_leaves_errors_untouched() {
        let response: ResultResponse<u8> =
            ResultResponse::error(vec!["x".into()], ErrorKind::CONFLICT);
        let mapped = response.map_data(|v| Ok::<_, ()>(v.to_string())).unwrap();
        assert_eq!(mapped.kind(), Some(&ErrorKind::CONFLICT));
    }
}
