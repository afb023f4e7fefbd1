//! Folder record and input.

use serde::{Deserialize, Serialize};

use super::defaults::{self, ITEM_DESCRIPTION, ITEM_NAME};
use super::lenient;

/// Fields a caller may supply when adding a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderInput {
    /// Folder name, `unknown` when absent.
    #[serde(deserialize_with = "lenient::or_none")]
    pub name: Option<String>,
    /// Folder description, `not available` when absent.
    #[serde(deserialize_with = "lenient::or_none")]
    pub description: Option<String>,
    /// Initial member request ids; non-string entries are dropped.
    #[serde(deserialize_with = "lenient::ids")]
    pub order: Option<Vec<String>>,
}

impl FolderInput {
    /// Creates an input carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the name the folder will carry once defaults are applied.
    #[must_use]
    pub fn resolved_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(ITEM_NAME)
    }

    /// Sets the initial member request ids.
    #[must_use]
    pub fn with_order(mut self, order: Vec<String>) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the folder description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named, ordered group of request ids.
///
/// `collection_id` and `collection_name` are copied from the collection
/// when the folder is created and are not updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    /// Unique identifier.
    pub id: String,
    /// Folder name, unique within its collection.
    pub name: String,
    /// Free text description.
    pub description: String,
    /// Member request ids in display order.
    pub order: Vec<String>,
    /// Owning collection id.
    pub collection_id: String,
    /// Owning collection name at creation time.
    pub collection_name: String,
}

impl FolderRecord {
    /// Builds a folder from caller input, filling every absent field.
    #[must_use]
    pub fn from_input(
        id: String,
        collection_id: impl Into<String>,
        collection_name: impl Into<String>,
        input: FolderInput,
    ) -> Self {
        Self {
            id,
            name: defaults::text_or(input.name, ITEM_NAME),
            description: defaults::text_or(input.description, ITEM_DESCRIPTION),
            order: input.order.unwrap_or_default(),
            collection_id: collection_id.into(),
            collection_name: collection_name.into(),
        }
    }

    /// Returns whether `request_id` is a member of this folder.
    #[must_use]
    pub fn contains(&self, request_id: &str) -> bool {
        self.order.iter().any(|id| id == request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_folder_defaults() {
        let folder = FolderRecord::from_input("f-1".into(), "c-1", "api", FolderInput::default());
        assert_eq!(folder.name, "unknown");
        assert_eq!(folder.description, "not available");
        assert!(folder.order.is_empty());
        assert_eq!(FolderInput::default().resolved_name(), "unknown");
        assert_eq!(folder.collection_id, "c-1");
        assert_eq!(folder.collection_name, "api");
    }

    #[test]
    fn test_folder_with_order() {
        let input = FolderInput::named("my-folder")
            .with_description("my folder description")
            .with_order(vec!["123".to_string()]);
        let folder = FolderRecord::from_input("f-1".into(), "c-1", "api", input);

        assert_eq!(folder.name, "my-folder");
        assert_eq!(folder.description, "my folder description");
        assert_eq!(folder.order, vec!["123".to_string()]);
        assert!(folder.contains("123"));
        assert!(!folder.contains("456"));
    }

    #[test]
    fn test_folder_input_with_string_order() {
        let input: FolderInput = serde_json::from_value(serde_json::json!({
            "name": "my-folder",
            "description": ["not", "text"],
            "order": "123"
        }))
        .unwrap_or_default();

        assert_eq!(input.name.as_deref(), Some("my-folder"));
        assert_eq!(input.description, None);
        assert_eq!(input.order, Some(vec!["123".to_string()]));
    }
}
