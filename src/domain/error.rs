// src/domain/error.rs
use crate::domain::{
    contract::{ContractError, ContractResult},
    error_kind::ErrorKind,
};
use serde::Serialize;
use std::fmt;

/// One specific cause of a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub description: String,
}

impl ErrorDetail {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// An immutable failure value: one or more details sharing a single kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    details: Vec<ErrorDetail>,
    kind: ErrorKind,
}

impl Error {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<ErrorKind>,
    ) -> Self {
        Self {
            details: vec![ErrorDetail::new(code, description)],
            kind: kind.into(),
        }
    }

    pub fn with_details(
        details: impl IntoIterator<Item = ErrorDetail>,
        kind: impl Into<ErrorKind>,
    ) -> ContractResult<Self> {
        let details: Vec<ErrorDetail> = details.into_iter().collect();
        if details.is_empty() {
            return Err(ContractError::EmptyDetails);
        }
        Ok(Self {
            details,
            kind: kind.into(),
        })
    }

    /// Merge several errors into one. All errors must share the first
    /// error's kind; details keep their original order.
    pub fn combine(errors: impl IntoIterator<Item = Error>) -> ContractResult<Self> {
        let mut errors = errors.into_iter();
        let Some(first) = errors.next() else {
            return Err(ContractError::EmptyErrorList);
        };

        let Error { mut details, kind } = first;
        for error in errors {
            if error.kind != kind {
                return Err(ContractError::MixedKinds {
                    expected: kind.to_string(),
                    found: error.kind.to_string(),
                });
            }
            details.extend(error.details);
        }

        Ok(Self { details, kind })
    }

    pub fn failure(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::FAILURE)
    }

    pub fn validation(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::VALIDATION)
    }

    pub fn not_found(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::NOT_FOUND)
    }

    pub fn conflict(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::CONFLICT)
    }

    pub fn unauthorized(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::UNAUTHORIZED)
    }

    pub fn forbidden(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::FORBIDDEN)
    }

    pub fn details(&self) -> &[ErrorDetail] {
        &self.details
    }

    /// Never fails: an `Error` always has at least one detail.
    pub fn first(&self) -> &ErrorDetail {
        &self.details[0]
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn list_descriptions(&self) -> Vec<String> {
        self.details
            .iter()
            .map(|detail| detail.description.clone())
            .collect()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.kind)?;
        for (index, detail) in self.details.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            if detail.code.is_empty() {
                f.write_str(&detail.description)?;
            } else {
                write!(f, "[{}] {}", detail.code, detail.description)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
