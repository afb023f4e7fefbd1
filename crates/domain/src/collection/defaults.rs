//! Placeholder values and absence rules shared by every record.
//!
//! A supplied value counts as absent when it is missing, `null`, or
//! falsy: the empty string, `false`, or zero.

use serde_json::{Map, Value};

/// Collection name used when none is supplied.
pub const COLLECTION_NAME: &str = "postman-collection-generator";
/// Collection description used when none is supplied.
pub const COLLECTION_DESCRIPTION: &str = "no description available";
/// Folder and request name used when none is supplied.
pub const ITEM_NAME: &str = "unknown";
/// Folder and request description used when none is supplied.
pub const ITEM_DESCRIPTION: &str = "not available";
/// Version stamped on every request.
pub const REQUEST_VERSION: &str = "2";
/// Description format stamped on every request.
pub const DESCRIPTION_FORMAT: &str = "html";

/// Returns whether a JSON value is falsy.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Returns the supplied text, or `placeholder` when it is absent or empty.
#[must_use]
pub fn text_or(value: Option<String>, placeholder: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Returns the supplied JSON value, or `fallback` when it is absent or falsy.
#[must_use]
pub fn value_or(value: Option<Value>, fallback: impl FnOnce() -> Value) -> Value {
    value.filter(|v| !is_falsy(v)).unwrap_or_else(fallback)
}

/// Empty string value.
#[must_use]
pub const fn empty_text() -> Value {
    Value::String(String::new())
}

/// Empty object value.
#[must_use]
pub fn empty_map() -> Value {
    Value::Object(Map::new())
}

/// Empty array value.
#[must_use]
pub const fn empty_list() -> Value {
    Value::Array(Vec::new())
}

/// Returns the supplied timestamp, or `now` when it is absent or zero.
#[must_use]
pub fn time_or(value: Option<i64>, now: i64) -> i64 {
    value.filter(|t| *t != 0).unwrap_or(now)
}
