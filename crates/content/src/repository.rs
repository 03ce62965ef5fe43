//! The repository contract consumed by the search orchestrator

use async_trait::async_trait;
use folio_core::{ContentKind, ContentRecord, Result};

/// Black-box contract for one content store
///
/// Each repository filters its own records by case-insensitive substring
/// match against its own relevant text fields (title, body, category, tags as
/// applicable) and returns candidate records. Draft records are never
/// returned. The search subsystem does not depend on *how* a repository
/// filters, only that the returned records are plausible candidates.
///
/// # Thread Safety
///
/// Repositories must be Send + Sync: the orchestrator queries all four
/// concurrently.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// The content kind this repository serves
    fn kind(&self) -> ContentKind;

    /// Find non-draft records matching the query
    ///
    /// `query` is already trimmed and non-empty; matching is
    /// case-insensitive. A connectivity or storage failure is terminal for
    /// the whole search request, so errors carry the repository kind.
    async fn find_matching(&self, query: &str) -> Result<Vec<ContentRecord>>;
}
