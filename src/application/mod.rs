// src/application/mod.rs
pub mod configuration;
pub mod matcher;
pub mod problem;
pub mod registry;
pub mod response;
pub mod validation;

pub use configuration::{ResultConfig, register_error_type, set_use_problem_details_default};
pub use matcher::{Matcher, RenderResponse};
pub use problem::ProblemDetails;
pub use registry::{ErrorTypeMapping, ErrorTypeRegistry};
pub use response::{ResultResponse, ResultResponseError, ResultResponseSuccess};
