//! Adapters implementing the application ports.

mod fixed_clock;
mod sequential_id_generator;
mod system_clock;
mod uuid_generator;

pub use fixed_clock::FixedClock;
pub use sequential_id_generator::SequentialIdGenerator;
pub use system_clock::SystemClock;
pub use uuid_generator::UuidV7Generator;
