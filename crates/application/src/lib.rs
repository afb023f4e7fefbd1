//! Postbuild Application - Collection building
//!
//! This crate holds the [`CollectionBuilder`] and the ports it depends on.
//! Concrete id generators and clocks live in the infrastructure layer.

pub mod builder;
pub mod config;
pub mod error;
pub mod ports;

pub use builder::CollectionBuilder;
pub use config::{BuilderConfig, DuplicateFolderPolicy};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, IdGenerator};
