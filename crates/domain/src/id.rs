//! ID generation utilities.

use uuid::Uuid;

/// Generates a new identifier for a collection, folder or request.
///
/// Identifiers are UUID v7 strings, so they sort by creation time.
#[must_use]
pub fn generate_id() -> String {
    generate_id_v7().to_string()
}

/// Generates a new UUID v7.
///
/// UUID v7 includes timestamp information and is sortable.
#[must_use]
pub fn generate_id_v7() -> Uuid {
    Uuid::now_v7()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id();
        // 8-4-4-4-12 = 36 chars
        assert_eq!(id.len(), 36);
        assert_eq!(Uuid::parse_str(&id).unwrap().get_version_num(), 7);
    }

    #[test]
    fn test_generate_id_uniqueness() {
        let ids: std::collections::HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generate_id_v7_is_time_ordered() {
        let first = generate_id_v7();
        let second = generate_id_v7();
        assert!(first < second);
    }
}
