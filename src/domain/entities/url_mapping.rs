//! Url mapping entity: the association between a long URL and its short code.

use serde::Serialize;
use sqlx::FromRow;

/// A persisted long URL and the short code derived from its id.
///
/// Mappings are created once and never modified. `short_code` always equals
/// [`encode(id)`](crate::utils::code_generator::encode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, long_url: String, short_code: String) -> Self {
        Self {
            id,
            long_url,
            short_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_mapping_creation() {
        let mapping = UrlMapping::new(31, "https://example.com".to_string(), "1f".to_string());

        assert_eq!(mapping.id, 31);
        assert_eq!(mapping.long_url, "https://example.com");
        assert_eq!(mapping.short_code, "1f");
    }

    #[test]
    fn test_url_mapping_serializes_all_fields() {
        let mapping = UrlMapping::new(1, "https://rust-lang.org".to_string(), "1".to_string());

        let json = serde_json::to_value(&mapping).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["long_url"], "https://rust-lang.org");
        assert_eq!(json["short_code"], "1");
    }
}
