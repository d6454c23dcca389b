// src/application/matcher.rs
use crate::application::{
    configuration::ResultConfig,
    problem::ProblemDetails,
    response::{ResultResponse, ResultResponseError},
};
use crate::domain::{
    contract::{ContractError, ContractResult},
    outcome::Outcome,
};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::{future::Future, sync::Arc};

/// A framework response type the built-in fallbacks know how to produce.
/// `render` is used for plain failure bodies; `render_success` only ever
/// receives a success response.
pub trait RenderResponse: Sized {
    fn render<B: Serialize>(status: StatusCode, body: &B) -> ContractResult<Self>;

    fn render_success<B: Serialize>(body: &B) -> ContractResult<Self> {
        Self::render(StatusCode::OK, body)
    }

    fn render_problem(problem: ProblemDetails) -> ContractResult<Self> {
        Self::render(problem.status_code(), &problem)
    }
}

/// Replaces the built-in success rendering. Receives the response with its
/// payload already serialized.
pub type SuccessFallback<R> = Arc<dyn Fn(ResultResponse<Value>) -> R + Send + Sync>;

/// Replaces the built-in failure rendering. The flag is the resolved
/// problem-details preference: the caller's explicit choice when given, else
/// the configured default. A fallback that needs to tell the two apart can
/// compare against [`ResultConfig::use_problem_details_by_default`].
pub type FailureFallback<R> = Arc<dyn Fn(ResultResponseError, bool) -> R + Send + Sync>;

type NoHandler<T, R> = fn(ResultResponse<T>) -> R;
type NoAsyncHandler<T, R> = fn(ResultResponse<T>) -> std::future::Ready<R>;

/// Picks the function that turns a [`ResultResponse`] into `R`: the caller's
/// handler for the branch when given, else the injected fallback, else the
/// built-in default.
pub struct Matcher<R> {
    config: Arc<ResultConfig>,
    success_fallback: Option<SuccessFallback<R>>,
    failure_fallback: Option<FailureFallback<R>>,
}

impl<R> Clone for Matcher<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            success_fallback: self.success_fallback.clone(),
            failure_fallback: self.failure_fallback.clone(),
        }
    }
}

impl<R: RenderResponse> Default for Matcher<R> {
    fn default() -> Self {
        Self::global()
    }
}

impl<R: RenderResponse> Matcher<R> {
    pub fn new(config: Arc<ResultConfig>) -> Self {
        Self {
            config,
            success_fallback: None,
            failure_fallback: None,
        }
    }

    pub fn global() -> Self {
        Self::new(ResultConfig::global())
    }

    pub fn with_success_fallback(
        mut self,
        fallback: impl Fn(ResultResponse<Value>) -> R + Send + Sync + 'static,
    ) -> Self {
        self.success_fallback = Some(Arc::new(fallback));
        self
    }

    pub fn with_failure_fallback(
        mut self,
        fallback: impl Fn(ResultResponseError, bool) -> R + Send + Sync + 'static,
    ) -> Self {
        self.failure_fallback = Some(Arc::new(fallback));
        self
    }

    pub fn config(&self) -> &ResultConfig {
        &self.config
    }

    pub fn match_response<T, S, F>(
        &self,
        response: ResultResponse<T>,
        on_success: Option<S>,
        on_failure: Option<F>,
        use_problem_details: Option<bool>,
    ) -> ContractResult<R>
    where
        T: Serialize,
        S: FnOnce(ResultResponse<T>) -> R,
        F: FnOnce(ResultResponse<T>) -> R,
    {
        if response.is_success() {
            match on_success {
                Some(handler) => {
                    tracing::debug!(branch = "success", "explicit handler");
                    Ok(handler(response))
                }
                None => self.success_fallback(response),
            }
        } else {
            match on_failure {
                Some(handler) => {
                    tracing::debug!(branch = "failure", "explicit handler");
                    Ok(handler(response))
                }
                None => self.failure_fallback(response, use_problem_details),
            }
        }
    }

    pub fn match_with<T, S, F>(
        &self,
        response: ResultResponse<T>,
        on_success: S,
        on_failure: F,
    ) -> ContractResult<R>
    where
        T: Serialize,
        S: FnOnce(ResultResponse<T>) -> R,
        F: FnOnce(ResultResponse<T>) -> R,
    {
        self.match_response(response, Some(on_success), Some(on_failure), None)
    }

    /// Only the success branch is handled by the caller.
    pub fn match_success<T, S>(
        &self,
        response: ResultResponse<T>,
        on_success: S,
        use_problem_details: Option<bool>,
    ) -> ContractResult<R>
    where
        T: Serialize,
        S: FnOnce(ResultResponse<T>) -> R,
    {
        self.match_response(
            response,
            Some(on_success),
            None::<NoHandler<T, R>>,
            use_problem_details,
        )
    }

    /// Only the failure branch is handled by the caller.
    pub fn match_failure<T, F>(
        &self,
        response: ResultResponse<T>,
        on_failure: F,
    ) -> ContractResult<R>
    where
        T: Serialize,
        F: FnOnce(ResultResponse<T>) -> R,
    {
        self.match_response(response, None::<NoHandler<T, R>>, Some(on_failure), None)
    }

    /// Both branches go through the fallbacks.
    pub fn render<T: Serialize>(
        &self,
        response: ResultResponse<T>,
        use_problem_details: Option<bool>,
    ) -> ContractResult<R> {
        self.match_response(
            response,
            None::<NoHandler<T, R>>,
            None::<NoHandler<T, R>>,
            use_problem_details,
        )
    }

    pub fn render_outcome<T: Serialize>(
        &self,
        outcome: Outcome<T>,
        use_problem_details: Option<bool>,
    ) -> ContractResult<R> {
        self.render(outcome.into_result_response(), use_problem_details)
    }

    /// Same resolution as [`Matcher::match_response`]; the handler chosen
    /// for the branch is awaited once.
    pub async fn match_response_async<T, S, SFut, F, FFut>(
        &self,
        response: ResultResponse<T>,
        on_success: Option<S>,
        on_failure: Option<F>,
        use_problem_details: Option<bool>,
    ) -> ContractResult<R>
    where
        T: Serialize,
        S: FnOnce(ResultResponse<T>) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(ResultResponse<T>) -> FFut,
        FFut: Future<Output = R>,
    {
        if response.is_success() {
            match on_success {
                Some(handler) => {
                    tracing::debug!(branch = "success", "explicit async handler");
                    Ok(handler(response).await)
                }
                None => self.success_fallback(response),
            }
        } else {
            match on_failure {
                Some(handler) => {
                    tracing::debug!(branch = "failure", "explicit async handler");
                    Ok(handler(response).await)
                }
                None => self.failure_fallback(response, use_problem_details),
            }
        }
    }

    pub async fn match_success_async<T, S, SFut>(
        &self,
        response: ResultResponse<T>,
        on_success: S,
        use_problem_details: Option<bool>,
    ) -> ContractResult<R>
    where
        T: Serialize,
        S: FnOnce(ResultResponse<T>) -> SFut,
        SFut: Future<Output = R>,
    {
        self.match_response_async(
            response,
            Some(on_success),
            None::<NoAsyncHandler<T, R>>,
            use_problem_details,
        )
        .await
    }

    pub async fn match_failure_async<T, F, FFut>(
        &self,
        response: ResultResponse<T>,
        on_failure: F,
    ) -> ContractResult<R>
    where
        T: Serialize,
        F: FnOnce(ResultResponse<T>) -> FFut,
        FFut: Future<Output = R>,
    {
        self.match_response_async(response, None::<NoAsyncHandler<T, R>>, Some(on_failure), None)
            .await
    }

    pub fn success_fallback<T: Serialize>(&self, response: ResultResponse<T>) -> ContractResult<R> {
        match &self.success_fallback {
            Some(fallback) => {
                tracing::debug!(branch = "success", "injected fallback");
                let response = response.map_data(serde_json::to_value)?;
                Ok(fallback(response))
            }
            None => {
                tracing::debug!(branch = "success", "built-in fallback");
                default_success(&response)
            }
        }
    }

    pub fn failure_fallback<T>(
        &self,
        response: ResultResponse<T>,
        use_problem_details: Option<bool>,
    ) -> ContractResult<R> {
        match &self.failure_fallback {
            Some(fallback) => {
                tracing::debug!(branch = "failure", "injected fallback");
                let ResultResponse::Error(error) = response else {
                    return Err(ContractError::NotAFailure);
                };
                let use_problem_details = self.config.resolve_problem_details(use_problem_details);
                Ok(fallback(error, use_problem_details))
            }
            None => {
                tracing::debug!(branch = "failure", "built-in fallback");
                default_failure(&self.config, &response, use_problem_details)
            }
        }
    }
}

/// `200 OK` with the response itself as body.
pub fn default_success<R, T>(response: &ResultResponse<T>) -> ContractResult<R>
where
    R: RenderResponse,
    T: Serialize,
{
    if !response.is_success() {
        return Err(ContractError::NotASuccess);
    }
    R::render_success(response)
}

/// Problem details, or the plain error body under the mapped status.
pub fn default_failure<R, T>(
    config: &ResultConfig,
    response: &ResultResponse<T>,
    use_problem_details: Option<bool>,
) -> ContractResult<R>
where
    R: RenderResponse,
{
    let error = response.as_error().ok_or(ContractError::NotAFailure)?;
    if config.resolve_problem_details(use_problem_details) {
        R::render_problem(ProblemDetails::from_error(error, config.registry()))
    } else {
        R::render(config.registry().status_code(error.kind()), error)
    }
}
