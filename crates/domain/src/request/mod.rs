//! Request types: the method enumeration, request input and the
//! request record stored in a collection.

mod input;
mod method;
mod record;

pub use input::RequestInput;
pub use method::HttpMethod;
pub use record::RequestRecord;
