//! Collection builder.
//!
//! The builder owns one [`CollectionDocument`] and only ever appends to it.
//! Requests are always stored in the document's `requests` list; their ids
//! are filed in exactly one order list, either the collection's top-level
//! `order` or the `order` of a single folder.

use std::collections::HashMap;

use postbuild_domain::{
    BuildWarning, CollectionDocument, CollectionInput, FolderInput, FolderRecord, HttpMethod,
    RequestInput, RequestRecord, SeedList, WarningKind,
};
use serde_json::Value;

use crate::config::{BuilderConfig, DuplicateFolderPolicy};
use crate::error::ApplicationResult;
use crate::ports::{Clock, IdGenerator};

const FOLDERS_PATH: &str = "collection/folders";
const REQUESTS_PATH: &str = "collection/requests";

/// Builds a collection document folder by folder and request by request.
pub struct CollectionBuilder<G: IdGenerator, C: Clock> {
    document: CollectionDocument,
    folder_index: HashMap<String, usize>,
    warnings: Vec<BuildWarning>,
    config: BuilderConfig,
    ids: G,
    clock: C,
}

impl<G: IdGenerator, C: Clock> CollectionBuilder<G, C> {
    /// Creates a builder for a collection with every field defaulted.
    pub fn new(ids: G, clock: C) -> Self {
        Self::with_input(CollectionInput::default(), ids, clock)
    }

    /// Creates a builder from typed input using the default configuration.
    pub fn with_input(input: CollectionInput, ids: G, clock: C) -> Self {
        Self::with_config(input, BuilderConfig::default(), ids, clock)
    }

    /// Creates a builder from typed input.
    ///
    /// Seed folders are added first, then seed requests, each in the order
    /// given. A seed that is not a list is skipped and recorded as a
    /// warning; construction itself never fails.
    pub fn with_config(mut input: CollectionInput, config: BuilderConfig, ids: G, clock: C) -> Self {
        let folders = input.folders.take();
        let requests = input.requests.take();

        let document = CollectionDocument::from_input(ids.next_id(), &input, clock.now_millis());
        tracing::debug!(
            collection_id = %document.id,
            name = %document.name,
            "created collection"
        );

        let mut builder = Self {
            document,
            folder_index: HashMap::new(),
            warnings: Vec::new(),
            config,
            ids,
            clock,
        };

        match folders {
            None => {}
            Some(SeedList::Items(items)) => {
                for folder in items {
                    builder.add_folder(folder);
                }
            }
            Some(SeedList::Malformed(value)) => builder.record_warning(BuildWarning::new(
                WarningKind::SeedNotAList,
                FOLDERS_PATH,
                format!("expected a list of folders, got {}; skipped", json_kind(&value)),
            )),
        }

        match requests {
            None => {}
            Some(SeedList::Items(items)) => {
                for request in items {
                    builder.add_request(request, None);
                }
            }
            Some(SeedList::Malformed(value)) => builder.record_warning(BuildWarning::new(
                WarningKind::SeedNotAList,
                REQUESTS_PATH,
                format!("expected a list of requests, got {}; skipped", json_kind(&value)),
            )),
        }

        builder
    }

    /// Creates a builder from loosely typed JSON input.
    ///
    /// `null` means no input. Object fields of the wrong type fall back to
    /// their own defaults; a value that is not an object yields an
    /// all-defaults collection and a warning.
    pub fn from_json(value: Value, ids: G, clock: C) -> Self {
        match value {
            Value::Null => Self::new(ids, clock),
            Value::Object(_) => match serde_json::from_value::<CollectionInput>(value) {
                Ok(input) => Self::with_input(input, ids, clock),
                Err(e) => {
                    let mut builder = Self::new(ids, clock);
                    builder.record_warning(BuildWarning::new(
                        WarningKind::OptionsIgnored,
                        "collection",
                        format!("unreadable collection options ({e}); defaults used"),
                    ));
                    builder
                }
            },
            other => {
                let mut builder = Self::new(ids, clock);
                builder.record_warning(BuildWarning::new(
                    WarningKind::OptionsIgnored,
                    "collection",
                    format!("expected an object, got {}; defaults used", json_kind(&other)),
                ));
                builder
            }
        }
    }

    /// Returns whether `method` is an accepted method token.
    ///
    /// Only the canonical uppercase and the fully lowercase spellings pass.
    #[must_use]
    pub fn is_method_valid(method: Option<&str>) -> bool {
        HttpMethod::is_valid_token(method)
    }

    /// Adds a request, optionally filing it under `folder_name`.
    ///
    /// Without a folder name the request id goes to the collection's
    /// top-level order. With one, it is appended to that folder's order,
    /// and the folder is created first if it does not exist yet.
    pub fn add_request(&mut self, input: RequestInput, folder_name: Option<&str>) -> &RequestRecord {
        let record = RequestRecord::from_input(
            self.ids.next_id(),
            self.document.id.as_str(),
            input,
            self.clock.now_millis(),
        );
        let request_id = record.id.clone();
        tracing::debug!(request_id = %request_id, method = %record.method, "added request");

        let position = self.document.requests.len();
        self.document.requests.push(record);

        match folder_name.filter(|name| !name.is_empty()) {
            None => self.document.order.push(request_id),
            Some(name) => match self.folder_exists(name) {
                Some(index) => self.document.folders[index].order.push(request_id),
                None => {
                    self.add_folder(FolderInput::named(name).with_order(vec![request_id]));
                }
            },
        }

        &self.document.requests[position]
    }

    /// Returns the index of the folder called `name`, if there is one.
    #[must_use]
    pub fn folder_exists(&self, name: &str) -> Option<usize> {
        self.folder_index.get(name).copied()
    }

    /// Adds a folder.
    ///
    /// Folder names are unique. When a folder with the same name already
    /// exists no new folder is created; the configured
    /// [`DuplicateFolderPolicy`] decides what happens to the input and the
    /// existing folder is returned.
    pub fn add_folder(&mut self, input: FolderInput) -> &FolderRecord {
        let name = input.resolved_name().to_string();

        if let Some(index) = self.folder_exists(&name) {
            self.reconcile_duplicate_folder(index, &name, input);
            return &self.document.folders[index];
        }

        let folder = FolderRecord::from_input(
            self.ids.next_id(),
            self.document.id.as_str(),
            self.document.name.as_str(),
            input,
        );
        tracing::debug!(folder_id = %folder.id, name = %folder.name, "added folder");

        let index = self.document.folders.len();
        self.folder_index.insert(name, index);
        self.document.folders.push(folder);
        &self.document.folders[index]
    }

    fn reconcile_duplicate_folder(&mut self, index: usize, name: &str, input: FolderInput) {
        let path = format!("{FOLDERS_PATH}/{name}");
        match self.config.duplicate_folders {
            DuplicateFolderPolicy::Merge => {
                let folder = &mut self.document.folders[index];
                let mut merged = 0;
                for id in input.order.unwrap_or_default() {
                    if !folder.contains(&id) {
                        folder.order.push(id);
                        merged += 1;
                    }
                }
                self.record_warning(BuildWarning::new(
                    WarningKind::FolderMerged,
                    path,
                    format!("folder already exists; merged {merged} request id(s)"),
                ));
            }
            DuplicateFolderPolicy::Keep => self.record_warning(BuildWarning::new(
                WarningKind::FolderIgnored,
                path,
                "folder already exists; input ignored",
            )),
        }
    }

    /// Renders the whole document as JSON.
    ///
    /// Output is indented with two spaces unless pretty printing is turned
    /// off in the configuration. Calling this repeatedly without changes in
    /// between yields identical output.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn serialize(&self) -> ApplicationResult<String> {
        let json = if self.config.pretty_print {
            serde_json::to_string_pretty(&self.document)?
        } else {
            serde_json::to_string(&self.document)?
        };
        Ok(json)
    }

    /// Returns the document built so far.
    #[must_use]
    pub const fn document(&self) -> &CollectionDocument {
        &self.document
    }

    /// Consumes the builder and returns the document.
    #[must_use]
    pub fn into_document(self) -> CollectionDocument {
        self.document
    }

    /// Looks up a request by id.
    #[must_use]
    pub fn request(&self, id: &str) -> Option<&RequestRecord> {
        self.document.request(id)
    }

    /// Looks up a folder by name.
    #[must_use]
    pub fn folder(&self, name: &str) -> Option<&FolderRecord> {
        self.folder_exists(name)
            .and_then(|index| self.document.folders.get(index))
    }

    /// Returns the warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    /// Removes and returns the warnings recorded so far.
    pub fn take_warnings(&mut self) -> Vec<BuildWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    fn record_warning(&mut self, warning: BuildWarning) {
        if warning.kind.drops_input() {
            tracing::warn!(path = %warning.path, "{}", warning.message);
        } else {
            tracing::info!(path = %warning.path, "{}", warning.message);
        }
        self.warnings.push(warning);
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
