//! Postbuild Infrastructure - Adapters and wiring
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer, plus helpers that wire them into a ready
//! [`CollectionBuilder`].

pub mod adapters;

pub use adapters::{FixedClock, SequentialIdGenerator, SystemClock, UuidV7Generator};

use postbuild_application::{BuilderConfig, CollectionBuilder};
use postbuild_domain::CollectionInput;

/// A builder using UUID v7 ids and the system clock.
pub type SystemCollectionBuilder = CollectionBuilder<UuidV7Generator, SystemClock>;

/// Creates a builder with production adapters and the default configuration.
#[must_use]
pub fn system_builder(input: CollectionInput) -> SystemCollectionBuilder {
    CollectionBuilder::with_input(input, UuidV7Generator::new(), SystemClock::new())
}

/// Creates a builder with production adapters and the given configuration.
#[must_use]
pub fn system_builder_with_config(
    input: CollectionInput,
    config: BuilderConfig,
) -> SystemCollectionBuilder {
    CollectionBuilder::with_config(input, config, UuidV7Generator::new(), SystemClock::new())
}

/// Creates a builder with production adapters from loosely typed JSON input.
#[must_use]
pub fn system_builder_from_json(value: serde_json::Value) -> SystemCollectionBuilder {
    CollectionBuilder::from_json(value, UuidV7Generator::new(), SystemClock::new())
}
