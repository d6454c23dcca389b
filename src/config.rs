// src/config.rs
use crate::application::configuration::ResultConfig;
use crate::domain::error_kind::ErrorKind;
use axum::http::StatusCode;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    use_problem_details: bool,
    error_type_mappings: Vec<ErrorTypeEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorTypeEntry {
    pub kind: ErrorKind,
    pub status: StatusCode,
    pub title: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let use_problem_details = match lookup("USE_PROBLEM_DETAILS") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "USE_PROBLEM_DETAILS must be a boolean, got '{value}'"
                ))
            })?,
            None => true,
        };

        let error_type_mappings = match lookup("ERROR_TYPE_MAPPINGS") {
            Some(value) => parse_mappings(&value)?,
            None => Vec::new(),
        };

        Ok(Self {
            listen_addr,
            use_problem_details,
            error_type_mappings,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn use_problem_details(&self) -> bool {
        self.use_problem_details
    }

    pub fn error_type_mappings(&self) -> &[ErrorTypeEntry] {
        &self.error_type_mappings
    }

    /// Install the rendering settings into a result configuration. Meant to
    /// run once at startup.
    pub fn apply(&self, config: &ResultConfig) {
        config.set_use_problem_details_by_default(self.use_problem_details);
        for entry in &self.error_type_mappings {
            config
                .registry()
                .register(entry.kind.clone(), entry.status, entry.title.clone());
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// `Kind=Status:Title` entries separated by `;`.
fn parse_mappings(value: &str) -> Result<Vec<ErrorTypeEntry>, ConfigError> {
    value
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let invalid =
                || ConfigError::Invalid(format!("malformed error type mapping '{entry}'"));
            let (kind, rest) = entry.split_once('=').ok_or_else(invalid)?;
            let (status, title) = rest.split_once(':').ok_or_else(invalid)?;
            let status = status
                .trim()
                .parse::<u16>()
                .ok()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .ok_or_else(invalid)?;
            let kind = kind.trim();
            if kind.is_empty() {
                return Err(invalid());
            }
            Ok(ErrorTypeEntry {
                kind: ErrorKind::new(kind),
                status,
                title: title.trim().to_string(),
            })
        })
        .collect()
}
