//! Free-text search filter model and list limits.
//!
//! A [`DocumentFilter`] is store-agnostic: the Postgres store renders it to
//! SQL, the in-memory store evaluates it with [`DocumentFilter::matches`].
//! Both must agree on the semantics documented here.

use serde_json::Value;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Default number of items returned by a list call.
pub const DEFAULT_LIST_LIMIT: i64 = 24;

/// Maximum number of items a single list call may return.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

// ---------------------------------------------------------------------------
// Searchable fields
// ---------------------------------------------------------------------------

/// String fields matched by a free-text search. A field a media kind does
/// not have simply never matches.
pub const SEARCH_TEXT_FIELDS: &[&str] = &["title", "author", "studio", "director"];

/// List-of-string field matched element by element.
pub const SEARCH_TAGS_FIELD: &str = "tags";

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFilter {
    /// Match every document in the collection.
    All,
    /// Case-insensitive substring match of the term against any of
    /// [`SEARCH_TEXT_FIELDS`] or any element of [`SEARCH_TAGS_FIELD`].
    Search(String),
    /// Exact, case-sensitive title match.
    TitleEquals(String),
}

impl DocumentFilter {
    /// Build the filter for an optional `?q=` parameter.
    ///
    /// The term is trimmed; an absent or blank term matches everything. The
    /// term is matched literally, it carries no pattern syntax.
    pub fn from_query(q: Option<&str>) -> Self {
        match q.map(str::trim) {
            Some(term) if !term.is_empty() => DocumentFilter::Search(term.to_string()),
            _ => DocumentFilter::All,
        }
    }

    /// Evaluate the filter against a JSON document body.
    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            DocumentFilter::All => true,
            DocumentFilter::Search(term) => {
                let needle = term.to_lowercase();
                let text_hit = SEARCH_TEXT_FIELDS.iter().any(|field| {
                    doc.get(field)
                        .and_then(Value::as_str)
                        .is_some_and(|value| contains_lowercase(value, &needle))
                });
                text_hit
                    || doc
                        .get(SEARCH_TAGS_FIELD)
                        .and_then(Value::as_array)
                        .is_some_and(|tags| {
                            tags.iter()
                                .filter_map(Value::as_str)
                                .any(|tag| contains_lowercase(tag, &needle))
                        })
            }
            DocumentFilter::TitleEquals(title) => {
                doc.get("title").and_then(Value::as_str) == Some(title.as_str())
            }
        }
    }
}

/// `needle` must already be lowercased.
fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 24);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(10_000), 24, 100), 100);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), 24, 100), 1);
        assert_eq!(clamp_limit(Some(-7), 24, 100), 1);
    }

    #[test]
    fn clamp_limit_passes_through_valid_value() {
        assert_eq!(clamp_limit(Some(2), 24, 100), 2);
    }

    // -- from_query ----------------------------------------------------------

    #[test]
    fn absent_or_blank_query_matches_all() {
        assert_eq!(DocumentFilter::from_query(None), DocumentFilter::All);
        assert_eq!(DocumentFilter::from_query(Some("")), DocumentFilter::All);
        assert_eq!(DocumentFilter::from_query(Some("   ")), DocumentFilter::All);
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(
            DocumentFilter::from_query(Some("  senja ")),
            DocumentFilter::Search("senja".into())
        );
    }

    // -- matches -------------------------------------------------------------

    #[test]
    fn search_matches_title_case_insensitively() {
        let doc = json!({ "title": "Bintang SENJA" });
        assert!(DocumentFilter::Search("senja".into()).matches(&doc));
        assert!(DocumentFilter::Search("Bintang s".into()).matches(&doc));
    }

    #[test]
    fn search_covers_author_studio_and_director() {
        let filter = DocumentFilter::Search("ghibli".into());
        assert!(filter.matches(&json!({ "title": "x", "studio": "Studio Ghibli" })));
        assert!(filter.matches(&json!({ "title": "x", "director": "ghibli fan" })));
        assert!(filter.matches(&json!({ "title": "x", "author": "GHIBLI" })));
        assert!(!filter.matches(&json!({ "title": "x", "synopsis": "ghibli" })));
    }

    #[test]
    fn search_matches_any_tag_substring() {
        let doc = json!({ "title": "x", "tags": ["drama", "Romansa"] });
        assert!(DocumentFilter::Search("roman".into()).matches(&doc));
        assert!(!DocumentFilter::Search("horror".into()).matches(&doc));
    }

    #[test]
    fn search_ignores_missing_null_and_non_string_fields() {
        let filter = DocumentFilter::Search("1".into());
        assert!(!filter.matches(&json!({ "title": "x", "author": null, "tags": null })));
        assert!(!filter.matches(&json!({ "title": "x", "episode": 1, "tags": [1, 2] })));
    }

    #[test]
    fn search_term_has_no_pattern_syntax() {
        let doc = json!({ "title": "Bintang Senja" });
        assert!(!DocumentFilter::Search("B.*a".into()).matches(&doc));
        assert!(DocumentFilter::Search("B.*a".into()).matches(&json!({ "title": "aB.*a" })));
    }

    #[test]
    fn title_equals_is_exact() {
        let doc = json!({ "title": "Bintang Senja" });
        assert!(DocumentFilter::TitleEquals("Bintang Senja".into()).matches(&doc));
        assert!(!DocumentFilter::TitleEquals("bintang senja".into()).matches(&doc));
        assert!(!DocumentFilter::TitleEquals("Bintang".into()).matches(&doc));
    }

    #[test]
    fn all_matches_everything() {
        assert!(DocumentFilter::All.matches(&json!({})));
    }
}
