// src/application/validation.rs
use crate::domain::{
    contract::{ContractError, ContractResult},
    error::{Error, ErrorDetail},
    error_kind::ErrorKind,
};
use validator::{ValidationErrors, ValidationErrorsKind};

const SCHEMA_FIELD: &str = "__all__";

/// One `Validation` error from (field, message) pairs. Messages without a
/// field get an empty code. An empty input means the model was valid, which
/// callers must check first.
pub fn from_field_messages(
    messages: impl IntoIterator<Item = (Option<String>, String)>,
) -> ContractResult<Error> {
    let details: Vec<ErrorDetail> = messages
        .into_iter()
        .map(|(field, message)| ErrorDetail::new(field.unwrap_or_default(), message))
        .collect();

    if details.is_empty() {
        return Err(ContractError::ValidModelState);
    }
    Error::with_details(details, ErrorKind::VALIDATION)
}

/// Flattens `validator` errors into a single `Validation` error. Nested
/// fields are addressed as `parent.child` and `items[0].name`.
pub fn from_validation_errors(errors: &ValidationErrors) -> ContractResult<Error> {
    let mut messages = Vec::new();
    collect(errors, None, &mut messages);
    from_field_messages(messages)
}

impl TryFrom<&ValidationErrors> for Error {
    type Error = ContractError;

    fn try_from(errors: &ValidationErrors) -> Result<Self, Self::Error> {
        from_validation_errors(errors)
    }
}

fn collect(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    out: &mut Vec<(Option<String>, String)>,
) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.to_string().cmp(&b.to_string()));

    for (field, kind) in fields {
        let field = field.to_string();
        let path = match (prefix, field.as_str()) {
            (None, SCHEMA_FIELD) => None,
            (Some(prefix), SCHEMA_FIELD) => Some(prefix.to_string()),
            (None, name) => Some(name.to_string()),
            (Some(prefix), name) => Some(format!("{prefix}.{name}")),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect(nested, path.as_deref(), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_path = format!("{}[{index}]", path.as_deref().unwrap_or_default());
                    collect(nested, Some(&item_path), out);
                }
            }
        }
    }
}
