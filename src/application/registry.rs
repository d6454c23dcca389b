// src/application/registry.rs
use crate::domain::error_kind::ErrorKind;
use axum::http::StatusCode;
use dashmap::DashMap;

pub const DEFAULT_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;
pub const DEFAULT_TITLE: &str = "Server Failure";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTypeMapping {
    pub status: StatusCode,
    pub title: String,
}

impl ErrorTypeMapping {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
        }
    }

    fn fallback() -> Self {
        Self::new(DEFAULT_STATUS, DEFAULT_TITLE)
    }
}

/// Maps error kinds to the HTTP status and title used when rendering a
/// failure. Reads never block each other; writes are expected at startup.
#[derive(Debug)]
pub struct ErrorTypeRegistry {
    entries: DashMap<ErrorKind, ErrorTypeMapping>,
}

impl Default for ErrorTypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ErrorTypeRegistry {
    /// A registry without any mapping; every kind resolves to the fallback.
    pub fn empty() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let registry = Self::empty();
        for (kind, status, title) in [
            (ErrorKind::FAILURE, StatusCode::INTERNAL_SERVER_ERROR, "Server Failure"),
            (ErrorKind::VALIDATION, StatusCode::BAD_REQUEST, "Bad Request"),
            (ErrorKind::NOT_FOUND, StatusCode::NOT_FOUND, "Not Found"),
            (ErrorKind::CONFLICT, StatusCode::CONFLICT, "Conflict"),
            (ErrorKind::UNAUTHORIZED, StatusCode::UNAUTHORIZED, "Unauthorized"),
            (ErrorKind::FORBIDDEN, StatusCode::FORBIDDEN, "Forbidden"),
        ] {
            registry
                .entries
                .insert(kind, ErrorTypeMapping::new(status, title));
        }
        registry
    }

    /// Upsert; the last registration for a kind wins.
    pub fn register(
        &self,
        kind: impl Into<ErrorKind>,
        status: StatusCode,
        title: impl Into<String>,
    ) {
        let kind = kind.into();
        let mapping = ErrorTypeMapping::new(status, title);
        tracing::info!(
            kind = %kind,
            status = status.as_u16(),
            title = %mapping.title,
            "error type registered"
        );
        self.entries.insert(kind, mapping);
    }

    pub fn mapping(&self, kind: &ErrorKind) -> ErrorTypeMapping {
        match self.entries.get(kind) {
            Some(entry) => entry.value().clone(),
            None => {
                tracing::warn!(
                    kind = %kind,
                    "unregistered error kind, using server failure mapping"
                );
                ErrorTypeMapping::fallback()
            }
        }
    }

    pub fn status_code(&self, kind: &ErrorKind) -> StatusCode {
        self.mapping(kind).status
    }

    pub fn title(&self, kind: &ErrorKind) -> String {
        self.mapping(kind).title
    }

    pub fn contains(&self, kind: &ErrorKind) -> bool {
        self.entries.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
