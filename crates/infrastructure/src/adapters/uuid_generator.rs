//! UUID v7 id generator

use postbuild_application::ports::IdGenerator;
use postbuild_domain::generate_id;

/// Generates time-ordered UUID v7 identifiers.
///
/// Holds no state; uniqueness comes from the UUID v7 layout, so any
/// number of generators can be used side by side.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl UuidV7Generator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> String {
        generate_id()
    }
}
