//! Search orchestration
//!
//! The orchestrator fans out one query to the four content repositories
//! concurrently, normalizes and scores every candidate, ranks, truncates,
//! and generates suggestions when the result set is thin.
//!
//! The orchestrator is STATELESS: it holds only shared handles to the
//! repositories and the scorer. All search state is ephemeral per request.

use crate::normalize::normalize;
use crate::scorer::{Scorer, WeightedScorer};
use crate::suggest::suggest;
use folio_content::ContentRepository;
use folio_core::limits::{MAX_RESULT_LIMIT, MIN_QUERY_CHARS, SUGGESTION_TRIGGER_RESULTS};
use folio_core::{Result, ScoredResult, SearchOutcome, SearchStats};
use std::sync::Arc;
use std::time::Instant;

// ============================================================================
// SearchOrchestrator
// ============================================================================

/// Composite search over the four content repositories
///
/// # Flow
///
/// 1. Trim and validate the query (short queries return the defined
///    empty-result outcome without touching any repository)
/// 2. Fan out to articles, portfolio, case studies, history concurrently
/// 3. Normalize every candidate into a `SearchableItem`
/// 4. Score; drop zero-score items
/// 5. Stable sort descending by score (ties keep fan-out order)
/// 6. Truncate to the requested limit
/// 7. Generate suggestions from the full candidate pool when fewer than
///    three results remain
///
/// # Failure semantics
///
/// Any repository failure fails the whole request: partial results going
/// undetected is worse than a loud 500. The error names the failing
/// repository.
#[derive(Clone)]
pub struct SearchOrchestrator {
    articles: Arc<dyn ContentRepository>,
    portfolio: Arc<dyn ContentRepository>,
    case_studies: Arc<dyn ContentRepository>,
    history: Arc<dyn ContentRepository>,
    scorer: Arc<dyn Scorer>,
}

impl SearchOrchestrator {
    /// Create an orchestrator over the four repositories
    ///
    /// Uses [`WeightedScorer`] by default.
    pub fn new(
        articles: Arc<dyn ContentRepository>,
        portfolio: Arc<dyn ContentRepository>,
        case_studies: Arc<dyn ContentRepository>,
        history: Arc<dyn ContentRepository>,
    ) -> Self {
        SearchOrchestrator {
            articles,
            portfolio,
            case_studies,
            history,
            scorer: Arc::new(WeightedScorer::new()),
        }
    }

    /// Builder: set a custom scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Search all repositories and return a ranked, truncated outcome
    ///
    /// `limit` is clamped to [`MAX_RESULT_LIMIT`]. Scoring is a pure function
    /// of (query, item), so repeated calls over unchanged content yield
    /// identical orderings and scores.
    pub async fn search(&self, raw_query: &str, limit: usize) -> Result<SearchOutcome> {
        let start = Instant::now();

        let query = raw_query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(SearchOutcome::too_short(query));
        }
        let limit = limit.min(MAX_RESULT_LIMIT);

        // Fan out concurrently; first repository error aborts the request.
        let fetched = tokio::try_join!(
            self.articles.find_matching(query),
            self.portfolio.find_matching(query),
            self.case_studies.find_matching(query),
            self.history.find_matching(query),
        );
        let (articles, portfolio, case_studies, history) = match fetched {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(query = %query, error = %e, "repository fan-out failed");
                return Err(e);
            }
        };

        let stats = [
            (self.articles.kind(), articles.len()),
            (self.portfolio.kind(), portfolio.len()),
            (self.case_studies.kind(), case_studies.len()),
            (self.history.kind(), history.len()),
        ]
        .into_iter()
        .fold(SearchStats::new(), |acc, (kind, count)| {
            acc.record(kind, count)
        });

        // Fan-out order is the tie-break order for equal scores.
        let candidates: Vec<_> = articles
            .iter()
            .chain(portfolio.iter())
            .chain(case_studies.iter())
            .chain(history.iter())
            .map(normalize)
            .collect();

        let mut scored: Vec<ScoredResult> = candidates
            .iter()
            .map(|item| {
                let score = self.scorer.score(
                    query,
                    &item.title,
                    &item.body,
                    item.category.as_deref(),
                );
                ScoredResult::new(item.clone(), score)
            })
            .filter(|result| result.score > 0.0)
            .collect();

        // Vec::sort_by is stable, so equal scores keep fan-out order.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total_results = scored.len();
        scored.truncate(limit);

        let suggestions = if scored.len() < SUGGESTION_TRIGGER_RESULTS {
            suggest(query, &candidates)
        } else {
            vec![]
        };

        let stats = stats.with_elapsed(start.elapsed().as_micros() as u64);
        tracing::info!(
            query = %query,
            results = scored.len(),
            total_results,
            content_scanned = stats.total_scanned(),
            elapsed_micros = stats.elapsed_micros,
            "search completed"
        );

        Ok(SearchOutcome {
            query: query.to_string(),
            results: scored,
            total_results,
            suggestions,
            message: None,
            stats,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
