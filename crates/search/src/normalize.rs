//! Result normalization
//!
//! Maps each repository's native record shape into the unified
//! `SearchableItem` consumed by the scorer. One exhaustive match covers the
//! whole closed set of content kinds.

use folio_core::limits::EXCERPT_CHARS;
use folio_core::{ContentKind, ContentRecord, SearchableItem};

/// Normalize a native content record into a `SearchableItem`
///
/// Absent optional fields degrade gracefully: a missing slug falls back to
/// the id, a missing article excerpt falls back to a truncated body, missing
/// case-study sections are skipped. Normalization never fails.
pub fn normalize(record: &ContentRecord) -> SearchableItem {
    match record {
        ContentRecord::Article(a) => SearchableItem {
            id: a.id.clone(),
            kind: ContentKind::Article,
            title: a.title.clone(),
            body: a.content.clone(),
            category: a.category.clone(),
            excerpt: Some(
                a.excerpt
                    .clone()
                    .unwrap_or_else(|| truncate_chars(&a.content)),
            ),
            slug: a.slug.clone(),
            url_path: format!("/blog/{}", a.slug.as_deref().unwrap_or(&a.id)),
        },
        ContentRecord::Portfolio(p) => SearchableItem {
            id: p.id.clone(),
            kind: ContentKind::Portfolio,
            title: p.title.clone(),
            body: p.description.clone(),
            category: p.category.clone(),
            excerpt: Some(truncate_chars(&p.description)),
            slug: p.slug.clone(),
            url_path: format!("/project/{}", p.slug.as_deref().unwrap_or(&p.id)),
        },
        ContentRecord::CaseStudy(c) => {
            let mut sections = vec![c.description.as_str()];
            sections.extend(c.challenge.as_deref());
            sections.extend(c.solution.as_deref());
            SearchableItem {
                id: c.id.clone(),
                kind: ContentKind::CaseStudy,
                title: c.title.clone(),
                body: sections.join(" "),
                category: c.category.clone(),
                excerpt: Some(truncate_chars(&c.description)),
                slug: c.slug.clone(),
                url_path: format!("/case-study/{}", c.slug.as_deref().unwrap_or(&c.id)),
            }
        }
        ContentRecord::History(h) => SearchableItem {
            id: h.id.clone(),
            kind: ContentKind::History,
            title: format!("{} at {}", h.position, h.company),
            body: h.description.clone(),
            category: Some("Experience".to_string()),
            excerpt: Some(truncate_chars(&h.description)),
            slug: None,
            // History entries have no page of their own, only a fixed anchor
            url_path: "/#experience".to_string(),
        },
    }
}

/// First `EXCERPT_CHARS` characters of `text`
///
/// Char-based so multi-byte text can never be split inside a code point.
fn truncate_chars(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}

// ============================================================================
// Tests
// ============================================================================
