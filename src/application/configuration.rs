// src/application/configuration.rs
use crate::application::registry::ErrorTypeRegistry;
use crate::domain::error_kind::ErrorKind;
use axum::http::StatusCode;
use once_cell::sync::Lazy;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

static GLOBAL: Lazy<Arc<ResultConfig>> = Lazy::new(|| Arc::new(ResultConfig::default()));

/// Rendering configuration shared by matchers: the error type registry and
/// whether failures render as problem details when the caller does not say.
#[derive(Debug)]
pub struct ResultConfig {
    registry: ErrorTypeRegistry,
    use_problem_details_by_default: AtomicBool,
}

impl Default for ResultConfig {
    fn default() -> Self {
        Self::new(ErrorTypeRegistry::with_defaults(), true)
    }
}

impl ResultConfig {
    pub fn new(registry: ErrorTypeRegistry, use_problem_details_by_default: bool) -> Self {
        Self {
            registry,
            use_problem_details_by_default: AtomicBool::new(use_problem_details_by_default),
        }
    }

    /// The process-wide instance used by `IntoResponse for Outcome` and by
    /// matchers built without an explicit configuration.
    pub fn global() -> Arc<ResultConfig> {
        Arc::clone(&GLOBAL)
    }

    pub fn registry(&self) -> &ErrorTypeRegistry {
        &self.registry
    }

    pub fn use_problem_details_by_default(&self) -> bool {
        self.use_problem_details_by_default.load(Ordering::Acquire)
    }

    pub fn set_use_problem_details_by_default(&self, value: bool) {
        self.use_problem_details_by_default
            .store(value, Ordering::Release);
    }

    /// Caller preference first, configured default otherwise.
    pub fn resolve_problem_details(&self, requested: Option<bool>) -> bool {
        requested.unwrap_or_else(|| self.use_problem_details_by_default())
    }
}

pub fn register_error_type(
    kind: impl Into<ErrorKind>,
    status: StatusCode,
    title: impl Into<String>,
) {
    GLOBAL.registry().register(kind, status, title);
}

pub fn set_use_problem_details_default(value: bool) {
    GLOBAL.set_use_problem_details_by_default(value);
}
