// src/domain/contract.rs
use thiserror::Error;

pub type ContractResult<T> = Result<T, ContractError>;

/// Caller-side misuse of the result model. These are programming errors,
/// unlike the domain failures carried inside an `Outcome`.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("an error must carry at least one detail")]
    EmptyDetails,

    #[error("cannot combine an empty list of errors")]
    EmptyErrorList,

    #[error("cannot combine errors of different kinds: expected {expected}, found {found}")]
    MixedKinds { expected: String, found: String },

    #[error("the success fallback was invoked on a failure response")]
    NotASuccess,

    #[error("a failure rendering was requested for a success response")]
    NotAFailure,

    #[error(
        "the fallback produced `{actual}`, which cannot be returned as `{requested}`; \
         add it to the declared result type"
    )]
    IncompatibleResult {
        requested: &'static str,
        actual: &'static str,
    },

    #[error("cannot build a validation error from a valid model")]
    ValidModelState,

    #[error("failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),
}
