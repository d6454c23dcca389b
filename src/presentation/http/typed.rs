// src/presentation/http/typed.rs
//! Matching for handlers that declare a closed set of concrete response
//! types instead of a bare `Response`.
//!
//! Fallbacks always produce a [`FallbackResult`]; it is then coerced into the
//! caller's declared type through [`TypedResponse`]. A declared type that
//! cannot hold what the fallback produced is reported as
//! [`ContractError::IncompatibleResult`] naming both types.
use crate::application::{
    configuration::ResultConfig,
    matcher::{Matcher, RenderResponse},
    problem::ProblemDetails,
    response::{ResultResponse, ResultResponseError},
};
use crate::domain::contract::{ContractError, ContractResult};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::{any::type_name, future::Future, sync::Arc};

/// `200 OK` with a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct OkResult(pub Value);

impl OkResult {
    pub fn new<B: Serialize>(body: &B) -> ContractResult<Self> {
        Ok(Self(serde_json::to_value(body)?))
    }
}

/// Problem details with `application/problem+json`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemResult(pub ProblemDetails);

/// Any status with a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResult {
    pub status: StatusCode,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FallbackResult {
    Ok(OkResult),
    Problem(ProblemResult),
    Json(JsonResult),
}

impl FallbackResult {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Ok(_) => type_name::<OkResult>(),
            Self::Problem(_) => type_name::<ProblemResult>(),
            Self::Json(_) => type_name::<JsonResult>(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Ok(_) => StatusCode::OK,
            Self::Problem(problem) => problem.0.status_code(),
            Self::Json(json) => json.status,
        }
    }
}

/// Success renders as [`OkResult`]; a plain failure body is always a
/// [`JsonResult`], whatever status its kind maps to.
impl RenderResponse for FallbackResult {
    fn render<B: Serialize>(status: StatusCode, body: &B) -> ContractResult<Self> {
        Ok(Self::Json(JsonResult {
            status,
            body: serde_json::to_value(body)?,
        }))
    }

    fn render_success<B: Serialize>(body: &B) -> ContractResult<Self> {
        OkResult::new(body).map(Self::Ok)
    }

    fn render_problem(problem: ProblemDetails) -> ContractResult<Self> {
        Ok(Self::Problem(ProblemResult(problem)))
    }
}

/// A declared handler return type that fallback output can be coerced into.
/// On mismatch the original value is handed back.
pub trait TypedResponse: Sized {
    fn coerce(result: FallbackResult) -> Result<Self, FallbackResult>;
}

impl TypedResponse for FallbackResult {
    fn coerce(result: FallbackResult) -> Result<Self, FallbackResult> {
        Ok(result)
    }
}

impl TypedResponse for OkResult {
    fn coerce(result: FallbackResult) -> Result<Self, FallbackResult> {
        match result {
            FallbackResult::Ok(ok) => Ok(ok),
            other => Err(other),
        }
    }
}

impl TypedResponse for ProblemResult {
    fn coerce(result: FallbackResult) -> Result<Self, FallbackResult> {
        match result {
            FallbackResult::Problem(problem) => Ok(problem),
            other => Err(other),
        }
    }
}

impl TypedResponse for JsonResult {
    fn coerce(result: FallbackResult) -> Result<Self, FallbackResult> {
        match result {
            FallbackResult::Json(json) => Ok(json),
            other => Err(other),
        }
    }
}

impl TypedResponse for Response {
    fn coerce(result: FallbackResult) -> Result<Self, FallbackResult> {
        Ok(result.into_response())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Results2<A, B> {
    First(A),
    Second(B),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Results3<A, B, C> {
    First(A),
    Second(B),
    Third(C),
}

impl<A: TypedResponse, B: TypedResponse> TypedResponse for Results2<A, B> {
    fn coerce(result: FallbackResult) -> Result<Self, FallbackResult> {
        A::coerce(result)
            .map(Self::First)
            .or_else(|result| B::coerce(result).map(Self::Second))
    }
}

impl<A, B, C> TypedResponse for Results3<A, B, C>
where
    A: TypedResponse,
    B: TypedResponse,
    C: TypedResponse,
{
    fn coerce(result: FallbackResult) -> Result<Self, FallbackResult> {
        A::coerce(result)
            .map(Self::First)
            .or_else(|result| B::coerce(result).map(Self::Second))
            .or_else(|result| C::coerce(result).map(Self::Third))
    }
}

pub fn coerce<TResult: TypedResponse>(result: FallbackResult) -> ContractResult<TResult> {
    TResult::coerce(result).map_err(|result| ContractError::IncompatibleResult {
        requested: type_name::<TResult>(),
        actual: result.variant_name(),
    })
}

impl IntoResponse for OkResult {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

impl IntoResponse for ProblemResult {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl IntoResponse for JsonResult {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl IntoResponse for FallbackResult {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(ok) => ok.into_response(),
            Self::Problem(problem) => problem.into_response(),
            Self::Json(json) => json.into_response(),
        }
    }
}

impl<A: IntoResponse, B: IntoResponse> IntoResponse for Results2<A, B> {
    fn into_response(self) -> Response {
        match self {
            Self::First(a) => a.into_response(),
            Self::Second(b) => b.into_response(),
        }
    }
}

impl<A, B, C> IntoResponse for Results3<A, B, C>
where
    A: IntoResponse,
    B: IntoResponse,
    C: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Self::First(a) => a.into_response(),
            Self::Second(b) => b.into_response(),
            Self::Third(c) => c.into_response(),
        }
    }
}

type NoHandler<T, R> = fn(ResultResponse<T>) -> R;
type NoAsyncHandler<T, R> = fn(ResultResponse<T>) -> std::future::Ready<R>;

/// Same resolution order as [`Matcher`], but the result is the caller's
/// declared `TResult`. Explicit handlers return `TResult` themselves;
/// fallback output is coerced.
#[derive(Clone, Default)]
pub struct TypedMatcher {
    inner: Matcher<FallbackResult>,
}

impl TypedMatcher {
    pub fn new(config: Arc<ResultConfig>) -> Self {
        Self {
            inner: Matcher::new(config),
        }
    }

    pub fn global() -> Self {
        Self {
            inner: Matcher::global(),
        }
    }

    pub fn with_success_fallback(
        self,
        fallback: impl Fn(ResultResponse<Value>) -> FallbackResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: self.inner.with_success_fallback(fallback),
        }
    }

    pub fn with_failure_fallback(
        self,
        fallback: impl Fn(ResultResponseError, bool) -> FallbackResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: self.inner.with_failure_fallback(fallback),
        }
    }

    pub fn match_response<T, TResult, S, F>(
        &self,
        response: ResultResponse<T>,
        on_success: Option<S>,
        on_failure: Option<F>,
        use_problem_details: Option<bool>,
    ) -> ContractResult<TResult>
    where
        T: Serialize,
        TResult: TypedResponse,
        S: FnOnce(ResultResponse<T>) -> TResult,
        F: FnOnce(ResultResponse<T>) -> TResult,
    {
        if response.is_success() {
            match on_success {
                Some(handler) => Ok(handler(response)),
                None => coerce(self.inner.success_fallback(response)?),
            }
        } else {
            match on_failure {
                Some(handler) => Ok(handler(response)),
                None => coerce(self.inner.failure_fallback(response, use_problem_details)?),
            }
        }
    }

    pub fn match_success<T, TResult, S>(
        &self,
        response: ResultResponse<T>,
        on_success: S,
        use_problem_details: Option<bool>,
    ) -> ContractResult<TResult>
    where
        T: Serialize,
        TResult: TypedResponse,
        S: FnOnce(ResultResponse<T>) -> TResult,
    {
        self.match_response(
            response,
            Some(on_success),
            None::<NoHandler<T, TResult>>,
            use_problem_details,
        )
    }

    pub fn render<T, TResult>(
        &self,
        response: ResultResponse<T>,
        use_problem_details: Option<bool>,
    ) -> ContractResult<TResult>
    where
        T: Serialize,
        TResult: TypedResponse,
    {
        self.match_response(
            response,
            None::<NoHandler<T, TResult>>,
            None::<NoHandler<T, TResult>>,
            use_problem_details,
        )
    }

    pub async fn match_response_async<T, TResult, S, SFut, F, FFut>(
        &self,
        response: ResultResponse<T>,
        on_success: Option<S>,
        on_failure: Option<F>,
        use_problem_details: Option<bool>,
    ) -> ContractResult<TResult>
    where
        T: Serialize,
        TResult: TypedResponse,
        S: FnOnce(ResultResponse<T>) -> SFut,
        SFut: Future<Output = TResult>,
        F: FnOnce(ResultResponse<T>) -> FFut,
        FFut: Future<Output = TResult>,
    {
        if response.is_success() {
            match on_success {
                Some(handler) => Ok(handler(response).await),
                None => coerce(self.inner.success_fallback(response)?),
            }
        } else {
            match on_failure {
                Some(handler) => Ok(handler(response).await),
                None => coerce(self.inner.failure_fallback(response, use_problem_details)?),
            }
        }
    }

    pub async fn match_success_async<T, TResult, S, SFut>(
        &self,
        response: ResultResponse<T>,
        on_success: S,
        use_problem_details: Option<bool>,
    ) -> ContractResult<TResult>
    where
        T: Serialize,
        TResult: TypedResponse,
        S: FnOnce(ResultResponse<T>) -> SFut,
        SFut: Future<Output = TResult>,
    {
        self.match_response_async(
            response,
            Some(on_success),
            None::<NoAsyncHandler<T, TResult>>,
            use_problem_details,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error_kind::ErrorKind;
    use serde_json::json;

    fn matcher() -> TypedMatcher {
        TypedMatcher::new(Arc::new(ResultConfig::default()))
    }

    fn not_found() -> ResultResponse<u32> {
        ResultResponse::error(vec!["missing".into()], ErrorKind::NOT_FOUND)
    }

    #[test]
    fn fallback_result_is_returned_as_is() {
        let result: FallbackResult = matcher().render(ResultResponse::success(5u32), None).unwrap();
        assert_eq!(
            result,
            FallbackResult::Ok(OkResult(json!({ "isSuccess": true, "data": 5 })))
        );
    }

    #[test]
    fn union_accepts_the_produced_member() {
        let result: Results2<OkResult, ProblemResult> =
            matcher().render(ResultResponse::success(5u32), None).unwrap();
        assert!(matches!(result, Results2::First(OkResult(_))));

        let result: Results2<OkResult, ProblemResult> =
            matcher().render(not_found(), None).unwrap();
        match result {
            Results2::Second(ProblemResult(problem)) => assert_eq!(problem.status, 404),
            other => panic!("expected problem, got {other:?}"),
        }

        let result: Results3<OkResult, ProblemResult, JsonResult> =
            matcher().render(not_found(), Some(false)).unwrap();
        match result {
            Results3::Third(json) => {
                assert_eq!(json.status, StatusCode::NOT_FOUND);
                assert_eq!(json.body["type"], "NotFound");
            }
            other => panic!("expected json result, got {other:?}"),
        }
    }

    #[test]
    fn incompatible_declared_type_names_both_types() {
        let result = matcher().render::<_, Results2<ProblemResult, JsonResult>>(
            ResultResponse::success(5u32),
            None,
        );
        match result {
            Err(ContractError::IncompatibleResult { requested, actual }) => {
                assert!(requested.contains("Results2"));
                assert!(actual.ends_with("OkResult"));
                let message = ContractError::IncompatibleResult { requested, actual }.to_string();
                assert!(message.contains("OkResult") && message.contains("Results2"));
            }
            other => panic!("expected incompatible result, got {other:?}"),
        }
    }

    #[test]
    fn explicit_handlers_bypass_coercion() {
        let result: OkResult = matcher()
            .match_response(
                not_found(),
                None::<fn(ResultResponse<u32>) -> OkResult>,
                Some(|response: ResultResponse<u32>| OkResult(json!(response.errors()))),
                None,
            )
            .unwrap();
        assert_eq!(result, OkResult(json!(["missing"])));
    }

    #[test]
    fn failure_fallback_into_single_type_is_rejected() {
        let result = matcher().match_success(not_found(), |_| OkResult(json!("unused")), None);
        assert!(matches!(result, Err(ContractError::IncompatibleResult { .. })));

        let result = matcher().match_success(
            ResultResponse::success(3u32),
            |response| OkResult(json!(response.data())),
            None,
        );
        assert_eq!(result.unwrap(), OkResult(json!(3)));
    }

    #[test]
    fn failure_mapped_to_ok_status_is_not_a_success() {
        let config = ResultConfig::default();
        config.registry().register("Accepted", StatusCode::OK, "Accepted");
        let matcher = TypedMatcher::new(Arc::new(config));
        let response: ResultResponse<u32> =
            ResultResponse::error(vec!["queued".into()], ErrorKind::new("Accepted"));

        let result: Results2<OkResult, JsonResult> = matcher.render(response, Some(false)).unwrap();
        assert_eq!(
            result,
            Results2::Second(JsonResult {
                status: StatusCode::OK,
                body: json!({ "isSuccess": false, "errors": ["queued"], "type": "Accepted" }),
            })
        );
    }

    #[test]
    fn axum_response_accepts_anything() {
        let response: Response = matcher().render(not_found(), None).unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn injected_fallback_output_is_coerced_too() {
        let matcher = matcher().with_failure_fallback(|error, _| {
            FallbackResult::Json(JsonResult {
                status: StatusCode::GONE,
                body: json!(error.errors()),
            })
        });
        let result: Results2<OkResult, JsonResult> = matcher.render(not_found(), None).unwrap();
        assert_eq!(
            result,
            Results2::Second(JsonResult {
                status: StatusCode::GONE,
                body: json!(["missing"]),
            })
        );
    }

    #[tokio::test]
    async fn async_typed_handlers() {
        let result: Results2<OkResult, ProblemResult> = matcher()
            .match_success_async(
                ResultResponse::success(1u32),
                |_| async { Results2::First(OkResult(json!("async"))) },
                None,
            )
            .await
            .unwrap();
        assert_eq!(result, Results2::First(OkResult(json!("async"))));

        let result: Results2<OkResult, ProblemResult> = matcher()
            .match_success_async(
                not_found(),
                |_| async { Results2::First(OkResult(Value::Null)) },
                None,
            )
            .await
            .unwrap();
        assert!(matches!(result, Results2::Second(_)));
    }
}
