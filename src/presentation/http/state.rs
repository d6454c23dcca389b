// src/presentation/http/state.rs
use crate::application::{configuration::ResultConfig, matcher::Matcher};
use crate::domain::item::ItemRepository;
use crate::presentation::http::typed::TypedMatcher;
use axum::response::Response;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub items: Arc<dyn ItemRepository>,
    pub matcher: Matcher<Response>,
    pub typed: TypedMatcher,
}

impl HttpState {
    pub fn new(items: Arc<dyn ItemRepository>, config: Arc<ResultConfig>) -> Self {
        Self {
            items,
            matcher: Matcher::new(Arc::clone(&config)),
            typed: TypedMatcher::new(config),
        }
    }
}
