//! Collection document types.
//!
//! A [`CollectionDocument`] stores every request in `requests`; the
//! collection's `order` and each folder's `order` only record membership
//! and display order.

pub mod defaults;
mod document;
mod folder;
mod input;
pub mod lenient;

pub use document::CollectionDocument;
pub use folder::{FolderInput, FolderRecord};
pub use input::{CollectionInput, SeedList};
