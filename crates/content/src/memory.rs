//! In-memory content store
//!
//! A lock-guarded record list per content kind. This is the implementation
//! used by the server binary and the test suites; a database-backed
//! repository would implement the same `ContentRepository` contract.

use crate::repository::ContentRepository;
use async_trait::async_trait;
use folio_core::{ContentKind, ContentRecord, Error, Result};
use parking_lot::RwLock;

/// In-memory store for one content kind
///
/// Records live behind an `RwLock`; `find_matching` takes a read lock only.
/// The store rejects records of a different kind so a miswired fan-out is an
/// explicit error instead of silently mislabeled results.
pub struct MemoryContentStore {
    kind: ContentKind,
    records: RwLock<Vec<ContentRecord>>,
}

impl MemoryContentStore {
    /// Create an empty store for the given content kind
    pub fn new(kind: ContentKind) -> Self {
        MemoryContentStore {
            kind,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Insert a record
    ///
    /// Returns `InvalidOperation` if the record's kind does not match the
    /// store's kind.
    pub fn insert(&self, record: impl Into<ContentRecord>) -> Result<()> {
        let record = record.into();
        if record.kind() != self.kind {
            return Err(Error::InvalidOperation(format!(
                "cannot insert {} record into {} store",
                record.kind(),
                self.kind
            )));
        }
        self.records.write().push(record);
        Ok(())
    }

    /// Number of records in the store, drafts included
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl ContentRepository for MemoryContentStore {
    fn kind(&self) -> ContentKind {
        self.kind
    }

    async fn find_matching(&self, query: &str) -> Result<Vec<ContentRecord>> {
        let needle = query.to_lowercase();
        let records = self.records.read();
        Ok(records
            .iter()
            .filter(|r| r.is_published() && record_matches(r, &needle))
            .cloned()
            .collect())
    }
}

/// Case-insensitive substring match against the record's relevant fields
///
/// `needle` must already be lowercase.
fn record_matches(record: &ContentRecord, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);
    let opt_contains = |text: &Option<String>| text.as_deref().is_some_and(contains);
    let tags_contain = |tags: &[String]| tags.iter().any(|t| contains(t));

    match record {
        ContentRecord::Article(a) => {
            contains(&a.title)
                || contains(&a.content)
                || opt_contains(&a.category)
                || tags_contain(&a.tags)
        }
        ContentRecord::Portfolio(p) => {
            contains(&p.title)
                || contains(&p.description)
                || opt_contains(&p.category)
                || tags_contain(&p.tags)
        }
        ContentRecord::CaseStudy(c) => {
            contains(&c.title)
                || contains(&c.description)
                || opt_contains(&c.challenge)
                || opt_contains(&c.solution)
                || opt_contains(&c.category)
                || tags_contain(&c.tags)
        }
        ContentRecord::History(h) => {
            contains(&h.position) || contains(&h.company) || contains(&h.description)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ArticleRecord, HistoryRecord, PortfolioRecord};

    fn article_store() -> MemoryContentStore {
        let store = MemoryContentStore::new(ContentKind::Article);
        store
            .insert(
                ArticleRecord::new("a1", "Rust on the backend", "Why we moved our API to Rust")
                    .with_category("Engineering")
                    .with_tags(vec!["rust".into(), "api".into()]),
            )
            .unwrap();
        store
            .insert(ArticleRecord::new("a2", "Design systems", "Tokens and components").draft())
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_find_matching_title() {
        let store = article_store();
        let hits = store.find_matching("rust").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), "a1");
    }

    #[tokio::test]
    async fn test_find_matching_is_case_insensitive() {
        let store = article_store();
        let hits = store.find_matching("RUST").await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_find_matching_tags() {
        let store = article_store();
        let hits = store.find_matching("api").await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_drafts_are_invisible() {
        let store = article_store();
        let hits = store.find_matching("design").await.unwrap();
        assert!(hits.is_empty());
        // but the draft still counts toward len()
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_no_match_returns_empty() {
        let store = article_store();
        let hits = store.find_matching("gardening").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_history_matches_position_and_company() {
        let store = MemoryContentStore::new(ContentKind::History);
        store
            .insert(HistoryRecord::new(
                "h1",
                "Staff Engineer",
                "Acme Corp",
                "Led the platform team",
            ))
            .unwrap();

        assert_eq!(store.find_matching("staff").await.unwrap().len(), 1);
        assert_eq!(store.find_matching("acme").await.unwrap().len(), 1);
        assert_eq!(store.find_matching("platform").await.unwrap().len(), 1);
    }

    #[test]
    fn test_insert_rejects_wrong_kind() {
        let store = MemoryContentStore::new(ContentKind::Article);
        let err = store
            .insert(PortfolioRecord::new("p1", "Site", "A website"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(_)));
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryContentStore::new(ContentKind::Portfolio);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
