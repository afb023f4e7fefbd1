//! Diagnostics recorded while a collection is built.
//!
//! Building never fails; input that cannot be used is reported here and
//! either skipped or reconciled.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What went wrong with a piece of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Collection options were not an object; every default was used.
    OptionsIgnored,
    /// A `folders` or `requests` seed was not a list and was skipped.
    SeedNotAList,
    /// A folder name was reused; the new member ids joined the existing folder.
    FolderMerged,
    /// A folder name was reused; the new folder input was dropped.
    FolderIgnored,
}

impl WarningKind {
    /// Returns whether some of the caller's input was thrown away.
    #[must_use]
    pub const fn drops_input(self) -> bool {
        !matches!(self, Self::FolderMerged)
    }
}

/// A non-fatal diagnostic, located by a slash-separated input path such
/// as `collection/folders/admin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildWarning {
    /// Category of the problem.
    pub kind: WarningKind,
    /// Where in the input it was found.
    pub path: String,
    /// Human-readable detail.
    pub message: String,
}

impl BuildWarning {
    /// Creates a warning.
    #[must_use]
    pub fn new(kind: WarningKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
