//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the builder and the outside world.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod clock;
mod id_generator;

pub use clock::Clock;
pub use id_generator::IdGenerator;
