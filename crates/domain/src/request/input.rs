//! Loosely typed request input.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collection::lenient;

/// Fields a caller may supply when adding a request.
///
/// Every field is optional. Free-form fields are kept as raw JSON values
/// and passed through to the record unvalidated; a typed field holding a
/// value of the wrong shape reads as absent. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestInput {
    #[serde(deserialize_with = "lenient::or_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub description: Option<String>,
    /// Method token; anything outside the accepted set becomes GET.
    #[serde(deserialize_with = "lenient::or_none")]
    pub method: Option<String>,
    pub url: Option<Value>,
    pub headers: Option<Value>,
    pub path_variables: Option<Value>,
    pub pre_request_script: Option<Value>,
    pub data: Option<Value>,
    pub data_mode: Option<Value>,
    pub tests: Option<Value>,
    pub responses: Option<Value>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub synced: Option<bool>,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(deserialize_with = "lenient::millis")]
    pub time: Option<i64>,
}

impl RequestInput {
    /// Creates an input carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the method token.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Sets the URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(Value::String(url.into()));
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw headers block (`Name: value` lines).
    #[must_use]
    pub fn with_headers(mut self, headers: impl Into<String>) -> Self {
        self.headers = Some(Value::String(headers.into()));
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case_and_ignore_unknown_keys() {
        let input: RequestInput = serde_json::from_value(json!({
            "name": "login",
            "pathVariables": {"id": "1"},
            "preRequestScript": "setup()",
            "dataMode": "raw",
            "somethingElse": true
        }))
        .unwrap();

        assert_eq!(input.name.as_deref(), Some("login"));
        assert_eq!(input.path_variables, Some(json!({"id": "1"})));
        assert_eq!(input.pre_request_script, Some(json!("setup()")));
        assert_eq!(input.data_mode, Some(json!("raw")));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let input: RequestInput =
            serde_json::from_value(json!({"url": null, "method": null})).unwrap();
        assert_eq!(input, RequestInput::default());
    }

    #[test]
    fn test_mistyped_fields_are_absent() {
        let input: RequestInput = serde_json::from_value(json!({
            "name": "r3",
            "method": 5,
            "synced": "true",
            "time": "2014"
        }))
        .unwrap();

        assert_eq!(input.name.as_deref(), Some("r3"));
        assert_eq!(input.method, None);
        assert_eq!(input.synced, None);
        assert_eq!(input.time, Some(2014));
    }

    #[test]
    fn test_builder_helpers() {
        let input = RequestInput::named("list users")
            .with_method("post")
            .with_url("http://localhost:8080/users");
        assert_eq!(input.method.as_deref(), Some("post"));
        assert_eq!(input.url, Some(json!("http://localhost:8080/users")));
    }
}
