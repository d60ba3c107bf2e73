//! Parsing of `input_id=value` assignments supplied on the command line.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("assignment '{0}' is missing '='")]
    MissingSeparator(String),
    #[error("assignment '{0}' has an empty input id")]
    EmptyInputId(String),
}

/// Splits `id=value` at the first `=`.
///
/// The value is parsed as JSON when possible (`5`, `true`, `{"class": "File"}`)
/// and otherwise kept as a plain string, so `name=sample` does not need quoting.
pub fn parse_assignment(raw: &str) -> Result<(String, Value), AssignmentError> {
    let (input_id, value) = raw
        .split_once('=')
        .ok_or_else(|| AssignmentError::MissingSeparator(raw.to_string()))?;
    let input_id = input_id.trim();
    if input_id.is_empty() {
        return Err(AssignmentError::EmptyInputId(raw.to_string()));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((input_id.to_string(), value))
}
