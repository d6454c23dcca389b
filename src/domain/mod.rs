// src/domain/mod.rs
pub mod contract;
pub mod error;
pub mod error_kind;
pub mod item;
pub mod outcome;

pub use contract::{ContractError, ContractResult};
pub use error::{Error, ErrorDetail};
pub use error_kind::ErrorKind;
pub use outcome::Outcome;
