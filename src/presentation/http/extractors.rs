// src/presentation/http/extractors.rs
use crate::application::{matcher::Matcher, validation::from_validation_errors};
use crate::domain::{error::Error, outcome::Outcome};
use crate::presentation::http::state::HttpState;
use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that must also pass `validator` checks. Both malformed bodies
/// and validation failures are rejected as a `Validation` failure. The
/// rejection renders through the router's [`HttpState`] matcher when one is
/// installed, else through the process-wide configuration.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

fn reject(matcher: &Matcher<Response>, error: Error) -> Response {
    matcher
        .render_outcome(Outcome::<()>::failure(error), None)
        .unwrap_or_else(IntoResponse::into_response)
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let matcher = req
            .extensions()
            .get::<HttpState>()
            .map_or_else(Matcher::global, |state| state.matcher.clone());

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "request body rejected");
                reject(&matcher, Error::validation("body", rejection.body_text()))
            })?;

        if let Err(errors) = value.validate() {
            let error = from_validation_errors(&errors).map_err(IntoResponse::into_response)?;
            return Err(reject(&matcher, error));
        }

        Ok(Self(value))
    }
}
