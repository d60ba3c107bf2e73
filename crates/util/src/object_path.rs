//! Safe lookups of dotted property paths inside JSON values.

use serde_json::Value;

/// Resolves a dotted path (`a.b.0.c`) against a JSON value.
///
/// Object segments are matched by key, array segments by numeric index.
/// Empty segments are skipped, so an empty path returns `value` itself.
/// Any missing key, out-of-range index or scalar in the middle of the path
/// yields `None` rather than an error.
pub fn get_property<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.').filter(|segment| !segment.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Converts a scalar JSON value into a grouping key.
///
/// Strings are used verbatim, numbers and booleans by their JSON text.
/// `null`, arrays and objects have no key.
pub fn scalar_key(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
