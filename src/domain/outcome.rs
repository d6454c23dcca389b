// src/domain/outcome.rs
use crate::domain::{contract::ContractError, error::Error};

/// Success carrying `T`, or failure carrying an [`Error`].
///
/// Unlike a sentinel-based design there is no "empty" error: a failure can
/// only be built from a real `Error`, so the two states cannot be confused.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(Error),
}

impl Outcome<()> {
    pub fn ok() -> Self {
        Self::Success(())
    }
}

impl<T> Outcome<T> {
    pub fn success(data: T) -> Self {
        Self::Success(data)
    }

    pub fn failure(error: Error) -> Self {
        Self::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// The success payload, or `T::default()` for a failure.
    pub fn data_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.data().cloned().unwrap_or_default()
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(data) => Outcome::Success(f(data)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Success(data) => f(data),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// A list of same-kind errors becomes a single combined failure.
impl<T> TryFrom<Vec<Error>> for Outcome<T> {
    type Error = ContractError;

    fn try_from(errors: Vec<Error>) -> Result<Self, Self::Error> {
        Error::combine(errors).map(Self::Failure)
    }
}
