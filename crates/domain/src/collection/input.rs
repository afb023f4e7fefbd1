//! Collection construction input.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::folder::FolderInput;
use super::lenient;
use crate::request::RequestInput;

/// A seed list supplied at construction time.
///
/// A JSON list always reads as [`SeedList::Items`]; each element is read
/// on its own, so a mistyped field only defaults that field. Anything
/// other than a list is kept as [`SeedList::Malformed`] so construction
/// can report it and carry on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeedList<T> {
    /// A proper list of items.
    Items(Vec<T>),
    /// Any other JSON value.
    Malformed(Value),
}

impl<'de, T: DeserializeOwned + Default> Deserialize<'de> for SeedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Self::Items(items.into_iter().map(lenient::seed_item).collect()),
            other => Self::Malformed(other),
        })
    }
}

impl<T> From<Vec<T>> for SeedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Items(items)
    }
}

/// Options accepted when a collection is created.
///
/// All keys are optional and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionInput {
    /// Collection name.
    #[serde(deserialize_with = "lenient::or_none")]
    pub name: Option<String>,
    /// Collection description.
    #[serde(deserialize_with = "lenient::or_none")]
    pub description: Option<String>,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(deserialize_with = "lenient::millis")]
    pub timestamp: Option<i64>,
    /// Sync flag.
    #[serde(deserialize_with = "lenient::or_none")]
    pub synced: Option<bool>,
    /// Folders to add, in order, right after creation.
    pub folders: Option<SeedList<FolderInput>>,
    /// Requests to add, in order, right after the folders.
    pub requests: Option<SeedList<RequestInput>>,
}

impl CollectionInput {
    /// Creates an input carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the folders to seed.
    #[must_use]
    pub fn with_folders(mut self, folders: Vec<FolderInput>) -> Self {
        self.folders = Some(folders.into());
        self
    }

    /// Sets the requests to seed.
    #[must_use]
    pub fn with_requests(mut self, requests: Vec<RequestInput>) -> Self {
        self.requests = Some(requests.into());
        self
    }
}
