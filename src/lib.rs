//! Tagged success/failure results and their rendering as HTTP responses.
//!
//! Business code returns an [`Outcome`]; the [`Matcher`] turns its
//! [`ResultResponse`] projection into a framework response, using the
//! caller's handlers when given and configurable fallbacks otherwise.
//! Failures can be rendered as problem details using the error type
//! registry held by [`ResultConfig`].
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::{
    Matcher, ProblemDetails, RenderResponse, ResultConfig, ResultResponse, ResultResponseError,
    register_error_type, set_use_problem_details_default,
};
pub use domain::{ContractError, ContractResult, Error, ErrorDetail, ErrorKind, Outcome};
pub use presentation::http::typed::TypedMatcher;
