//! Collection root document.

use serde::{Deserialize, Serialize};

use super::defaults::{self, COLLECTION_DESCRIPTION, COLLECTION_NAME};
use super::folder::FolderRecord;
use super::input::CollectionInput;
use crate::request::RequestRecord;

/// The root document of an exported collection.
///
/// Field order matches the import format:
/// `id, name, description, order, folders, timestamp, synced, requests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDocument {
    /// Unique identifier, fixed at creation.
    pub id: String,
    /// Collection name.
    pub name: String,
    /// Free text description.
    pub description: String,
    /// Ids of requests that are not inside any folder.
    pub order: Vec<String>,
    /// Folders in creation order.
    pub folders: Vec<FolderRecord>,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Sync flag.
    pub synced: bool,
    /// Every request in creation order, wherever it is filed.
    pub requests: Vec<RequestRecord>,
}

impl CollectionDocument {
    /// Creates an empty document from the metadata part of `input`.
    ///
    /// Seed lists in `input` are ignored here; the builder replays them.
    #[must_use]
    pub fn from_input(id: String, input: &CollectionInput, now_millis: i64) -> Self {
        Self {
            id,
            name: defaults::text_or(input.name.clone(), COLLECTION_NAME),
            description: defaults::text_or(input.description.clone(), COLLECTION_DESCRIPTION),
            order: Vec::new(),
            folders: Vec::new(),
            timestamp: defaults::time_or(input.timestamp, now_millis),
            synced: input.synced.unwrap_or(false),
            requests: Vec::new(),
        }
    }

    /// Finds a request by id.
    #[must_use]
    pub fn request(&self, id: &str) -> Option<&RequestRecord> {
        self.requests.iter().find(|r| r.id == id)
    }
}
