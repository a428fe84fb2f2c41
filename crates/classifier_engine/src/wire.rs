//! JSON shapes exchanged with the classification endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::{ClassifyError, FailureKind};

/// Request body: `{"descripcion": ..., "lista": ...}`.
#[derive(Debug, Serialize)]
pub struct ClassifyBody<'a> {
    pub descripcion: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lista: Option<&'a str>,
}

/// Extracts `categoria` from a response body.
///
/// The body must be a JSON object. Strings are returned as-is, non-zero
/// numbers and `true` as their JSON text. Falsy values (`null`, `false`, `0`,
/// `""`), a missing field, arrays and objects yield `None`.
pub fn category_from_body(bytes: &[u8]) -> Result<Option<String>, ClassifyError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| ClassifyError::new(FailureKind::InvalidBody, err.to_string()))?;
    let Value::Object(mut fields) = value else {
        return Err(ClassifyError::new(
            FailureKind::InvalidBody,
            "response is not a JSON object",
        ));
    };

    let category = match fields.remove("categoria") {
        Some(Value::String(text)) if !text.is_empty() => Some(text),
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    };
    Ok(category)
}
