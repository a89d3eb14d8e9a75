//! Request Body Parsing
//!
//! Bodies are extracted as raw JSON first so that a field holding the wrong
//! JSON type is reported against that field instead of failing the whole
//! document.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::errors::{ApiError, FieldError, UseCaseError};

const NOT_A_STRING_MESSAGE: &str = "Not a valid string.";

/// Field name used for errors that concern the body as a whole
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Turn an extracted JSON body into a DTO
///
/// `text_fields` must hold a string or `null` when present; every offender
/// is reported at once.
///
/// # Errors
///
/// Returns `ApiError::BadRequest` for unreadable JSON and
/// `UseCaseError::Validation` when the body is not an object or a text field
/// has the wrong type.
pub fn parse_json<T>(
    payload: Result<Json<Value>, JsonRejection>,
    text_fields: &[&'static str],
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let Json(body) = payload?;

    let Value::Object(fields) = &body else {
        return Err(UseCaseError::Validation(vec![FieldError::new(
            NON_FIELD_ERRORS,
            format!("Invalid data. Expected a dictionary, but got {}.", kind_of(&body)),
        )])
        .into());
    };

    let mut errors: Vec<FieldError> = text_fields
        .iter()
        .filter(|field| {
            matches!(
                fields.get(**field),
                Some(Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_))
            )
        })
        .map(|field| FieldError::new(*field, NOT_A_STRING_MESSAGE))
        .collect();

    if !errors.is_empty() {
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        return Err(UseCaseError::Validation(errors).into());
    }

    serde_json::from_value(body)
        .map_err(|err| ApiError::BadRequest(format!("Data error: {err}")))
}
