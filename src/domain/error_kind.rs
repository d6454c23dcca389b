// src/domain/error_kind.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{borrow::Cow, fmt};

/// Category of a failure. Open-ended: hosts may introduce their own kinds
/// with [`ErrorKind::new`] and map them to a status in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorKind(Cow<'static, str>);

impl ErrorKind {
    pub const FAILURE: Self = Self::from_static("Failure");
    pub const VALIDATION: Self = Self::from_static("Validation");
    pub const NOT_FOUND: Self = Self::from_static("NotFound");
    pub const CONFLICT: Self = Self::from_static("Conflict");
    pub const UNAUTHORIZED: Self = Self::from_static("Unauthorized");
    pub const FORBIDDEN: Self = Self::from_static("Forbidden");

    pub const BUILT_IN: [Self; 6] = [
        Self::FAILURE,
        Self::VALIDATION,
        Self::NOT_FOUND,
        Self::CONFLICT,
        Self::UNAUTHORIZED,
        Self::FORBIDDEN,
    ];

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_built_in(&self) -> bool {
        Self::BUILT_IN.contains(self)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ErrorKind {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ErrorKind {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<ErrorKind> for String {
    fn from(value: ErrorKind) -> Self {
        value.0.into_owned()
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ErrorKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
