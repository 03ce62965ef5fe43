//! Suggestion generation
//!
//! When a search returns too few results, alternate query terms are derived
//! from the candidate pool: title tokens and categories that overlap the
//! query in either direction. No ranking; first come, first served.

use folio_core::limits::{MAX_SUGGESTIONS, SUGGESTION_MIN_TOKEN_CHARS};
use folio_core::SearchableItem;
use std::collections::HashSet;

/// Derive up to [`MAX_SUGGESTIONS`] alternate query terms from `candidates`
///
/// Collected in deterministic insertion order, deduplicated:
/// - title tokens of at least [`SUGGESTION_MIN_TOKEN_CHARS`] characters where
///   the token contains the query or the query contains the token
/// - categories where the category contains the query or vice versa
///
/// All comparisons are lowercase; suggestions are emitted lowercase.
pub fn suggest(query: &str, candidates: &[SearchableItem]) -> Vec<String> {
    let query = query.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut suggestions: Vec<String> = Vec::new();

    let mut push = |term: String, seen: &mut HashSet<String>, out: &mut Vec<String>| {
        if out.len() < MAX_SUGGESTIONS && seen.insert(term.clone()) {
            out.push(term);
        }
    };

    for item in candidates {
        for token in item.title.to_lowercase().split_whitespace() {
            if token.chars().count() >= SUGGESTION_MIN_TOKEN_CHARS
                && (token.contains(&query) || query.contains(token))
            {
                push(token.to_string(), &mut seen, &mut suggestions);
            }
        }
        if let Some(category) = &item.category {
            let category = category.to_lowercase();
            if category.contains(&query) || query.contains(&category) {
                push(category, &mut seen, &mut suggestions);
            }
        }
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }

    suggestions
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ContentKind;

    fn item(title: &str, category: Option<&str>) -> SearchableItem {
        SearchableItem {
            id: "x".to_string(),
            kind: ContentKind::Article,
            title: title.to_string(),
            body: String::new(),
            category: category.map(String::from),
            excerpt: None,
            slug: None,
            url_path: "/blog/x".to_string(),
        }
    }

    #[test]
    fn test_title_tokens_overlapping_query() {
        let pool = [item("Digital Marketing Guide", None)];
        let suggestions = suggest("market", &pool);
        assert_eq!(suggestions, vec!["marketing".to_string()]);
    }

    #[test]
    fn test_query_containing_token() {
        // reverse direction: the query contains the candidate token
        let pool = [item("Rust Guide", None)];
        let suggestions = suggest("rust async patterns", &pool);
        assert_eq!(suggestions, vec!["rust".to_string()]);
    }

    #[test]
    fn test_short_tokens_are_skipped() {
        // "ai" has fewer than 4 chars, never suggested even though it overlaps
        let pool = [item("AI Now", None)];
        let suggestions = suggest("ai", &pool);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_category_overlap() {
        let pool = [item("Unrelated Title", Some("Marketing"))];
        let suggestions = suggest("marketing strategy", &pool);
        assert_eq!(suggestions, vec!["marketing".to_string()]);
    }

    #[test]
    fn test_deduplicates_across_candidates() {
        let pool = [
            item("Marketing Basics", Some("Marketing")),
            item("Advanced Marketing", Some("Marketing")),
        ];
        let suggestions = suggest("marketing", &pool);
        assert_eq!(suggestions, vec!["marketing".to_string()]);
    }

    #[test]
    fn test_caps_at_five() {
        let pool = [
            item("marketing marketed marketer marketers marketplace markets", None),
            item("remarketing", None),
        ];
        let suggestions = suggest("market", &pool);
        assert_eq!(suggestions.len(), 5);
    }

    #[test]
    fn test_insertion_order_is_deterministic() {
        let pool = [
            item("Marketing Basics", None),
            item("Marketplace Design", None),
        ];
        let suggestions = suggest("market", &pool);
        assert_eq!(
            suggestions,
            vec!["marketing".to_string(), "marketplace".to_string()]
        );
    }

    #[test]
    fn test_no_overlap_yields_empty() {
        let pool = [item("Gardening Weekly", Some("Hobbies"))];
        let suggestions = suggest("rust", &pool);
        assert!(suggestions.is_empty());
    }
}
