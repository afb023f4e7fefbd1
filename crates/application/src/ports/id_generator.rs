//! Identifier port

/// Port for allocating identifiers for collections, folders and requests.
///
/// Implementations must never return the same id twice within a process.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self) -> String;
}
