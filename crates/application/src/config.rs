//! Builder configuration

use serde::{Deserialize, Serialize};

/// What to do when a folder is added under a name that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateFolderPolicy {
    /// Append the incoming member ids to the existing folder.
    #[default]
    Merge,
    /// Leave the existing folder untouched.
    Keep,
}

/// Builder configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Handling of folders added under an existing name (default: merge)
    #[serde(default)]
    pub duplicate_folders: DuplicateFolderPolicy,
    /// Whether `serialize` emits indented JSON (default: true)
    #[serde(default = "default_true")]
    pub pretty_print: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            duplicate_folders: DuplicateFolderPolicy::Merge,
            pretty_print: true,
        }
    }
}
