//! Postbuild Domain - Core document types
//!
//! This crate defines the document model for a Postman v1 collection:
//! the collection root, its folders and its requests, plus the loosely
//! typed inputs they are built from. All types here are pure Rust with
//! no I/O dependencies.

pub mod collection;
pub mod error;
pub mod id;
pub mod request;
pub mod warning;

pub use collection::{
    CollectionDocument, CollectionInput, FolderInput, FolderRecord, SeedList, defaults,
};
pub use error::{DomainError, DomainResult};
pub use id::{generate_id, generate_id_v7};
pub use request::{HttpMethod, RequestInput, RequestRecord};
pub use warning::{BuildWarning, WarningKind};
