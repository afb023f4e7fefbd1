//! Request record as it appears in the collection document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{HttpMethod, RequestInput};
use crate::collection::defaults::{
    self, DESCRIPTION_FORMAT, ITEM_DESCRIPTION, ITEM_NAME, REQUEST_VERSION,
};

/// A single request definition.
///
/// Field order matches the exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free text description.
    pub description: String,
    /// Markup of `description`, always `html`.
    pub description_format: String,
    /// Normalized HTTP method.
    pub method: HttpMethod,
    /// Request URL.
    pub url: Value,
    /// Raw header block.
    pub headers: Value,
    /// Values for `:name` segments in the URL.
    pub path_variables: Value,
    /// Script run before the request is sent.
    pub pre_request_script: Value,
    /// Request body data.
    pub data: Value,
    /// How `data` is encoded.
    pub data_mode: Value,
    /// Record format version, always `2`.
    pub version: String,
    /// Test script run on the response.
    pub tests: Value,
    /// Saved example responses.
    pub responses: Value,
    /// Whether the request has been synced with the remote service.
    pub synced: bool,
    /// Owning collection.
    pub collection_id: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub time: i64,
}

impl RequestRecord {
    /// Builds a record from caller input, filling every absent field.
    #[must_use]
    pub fn from_input(
        id: String,
        collection_id: impl Into<String>,
        input: RequestInput,
        now_millis: i64,
    ) -> Self {
        Self {
            id,
            name: defaults::text_or(input.name, ITEM_NAME),
            description: defaults::text_or(input.description, ITEM_DESCRIPTION),
            description_format: DESCRIPTION_FORMAT.to_string(),
            method: HttpMethod::resolve(input.method.as_deref()),
            url: defaults::value_or(input.url, defaults::empty_text),
            headers: defaults::value_or(input.headers, defaults::empty_text),
            path_variables: defaults::value_or(input.path_variables, defaults::empty_map),
            pre_request_script: defaults::value_or(
                input.pre_request_script,
                defaults::empty_text,
            ),
            data: defaults::value_or(input.data, defaults::empty_list),
            data_mode: defaults::value_or(input.data_mode, defaults::empty_text),
            version: REQUEST_VERSION.to_string(),
            tests: defaults::value_or(input.tests, defaults::empty_text),
            responses: defaults::value_or(input.responses, defaults::empty_list),
            synced: input.synced.unwrap_or(false),
            collection_id: collection_id.into(),
            time: defaults::time_or(input.time, now_millis),
        }
    }
}
