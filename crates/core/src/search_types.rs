//! Core search types
//!
//! This module defines the types flowing through the search pipeline:
//! - SearchableItem: normalized, kind-agnostic view of one content record
//! - ScoredResult: a SearchableItem plus its relevance score
//! - SearchStats: per-request execution statistics with named fields
//! - SearchOutcome: the full result of one search request
//!
//! All of these are ephemeral: they exist only for the duration of one
//! request and are never persisted.

use crate::content::ContentKind;
use crate::limits::QUERY_TOO_SHORT_MESSAGE;
use serde::{Deserialize, Serialize};

// ============================================================================
// SearchableItem
// ============================================================================

/// Normalized view of one content record, produced transiently per request
///
/// Every repository's native shape is converted into this before scoring.
/// Absent optional fields degrade gracefully upstream (fallback to id, empty
/// string); none of these fields can null-propagate into the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableItem {
    /// Stable identifier of the source record
    pub id: String,
    /// Which repository the item came from
    pub kind: ContentKind,
    /// Display title (synthetic for history entries)
    pub title: String,
    /// Searchable body text
    pub body: String,
    /// Optional category label (fixed to "Experience" for history entries)
    pub category: Option<String>,
    /// Short display excerpt
    pub excerpt: Option<String>,
    /// Optional URL slug of the source record
    pub slug: Option<String>,
    /// Site-relative URL for the result link
    pub url_path: String,
}

// ============================================================================
// ScoredResult
// ============================================================================

/// A searchable item with its relevance score
///
/// # Invariant
///
/// The score is a deterministic pure function of (query, item): no hidden
/// state, no randomness. Always within `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    /// The normalized item
    pub item: SearchableItem,
    /// Relevance score in `[0, 1]`; higher is better
    pub score: f32,
}

impl ScoredResult {
    /// Create a new ScoredResult
    pub fn new(item: SearchableItem, score: f32) -> Self {
        ScoredResult { item, score }
    }
}

// ============================================================================
// SearchStats
// ============================================================================

/// Execution statistics for one search request
///
/// An explicit accumulator record with named per-repository fields, built by
/// folding over the fan-out results. Used for the per-request structured log
/// entry; never exposed to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate articles fetched from the article repository
    pub articles_scanned: usize,
    /// Candidate projects fetched from the portfolio repository
    pub portfolio_scanned: usize,
    /// Candidate case studies fetched from the case-study repository
    pub case_studies_scanned: usize,
    /// Candidate entries fetched from the history repository
    pub history_scanned: usize,
    /// Wall time spent in the orchestrator (microseconds)
    pub elapsed_micros: u64,
}

impl SearchStats {
    /// Create empty stats
    pub fn new() -> Self {
        SearchStats::default()
    }

    /// Record the candidate count fetched from one repository
    pub fn record(mut self, kind: ContentKind, count: usize) -> Self {
        match kind {
            ContentKind::Article => self.articles_scanned += count,
            ContentKind::Portfolio => self.portfolio_scanned += count,
            ContentKind::CaseStudy => self.case_studies_scanned += count,
            ContentKind::History => self.history_scanned += count,
        }
        self
    }

    /// Builder: set elapsed wall time
    pub fn with_elapsed(mut self, micros: u64) -> Self {
        self.elapsed_micros = micros;
        self
    }

    /// Total candidates fetched across all repositories
    pub fn total_scanned(&self) -> usize {
        self.articles_scanned
            + self.portfolio_scanned
            + self.case_studies_scanned
            + self.history_scanned
    }
}

// ============================================================================
// SearchOutcome
// ============================================================================

/// The full result of one search request
///
/// `results` is ordered descending by score with a stable tie-break in
/// fan-out order (articles, portfolio, case studies, history).
/// `total_results` counts all scored matches before limit truncation.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The trimmed query that was searched
    pub query: String,
    /// Ranked results, at most the requested limit
    pub results: Vec<ScoredResult>,
    /// Total matches before truncation
    pub total_results: usize,
    /// Alternate query terms; empty unless too few results were found
    pub suggestions: Vec<String>,
    /// Validation message for the "too short to search" outcome
    pub message: Option<String>,
    /// Execution statistics
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// The defined outcome for a query too short to search
    ///
    /// This is not an error: no repository is touched, and the response is a
    /// well-formed empty result set with a validation message.
    pub fn too_short(query: impl Into<String>) -> Self {
        SearchOutcome {
            query: query.into(),
            results: vec![],
            total_results: 0,
            suggestions: vec![],
            message: Some(QUERY_TOO_SHORT_MESSAGE.to_string()),
            stats: SearchStats::default(),
        }
    }

    /// Whether this outcome is the short-query validation response
    pub fn is_rejected(&self) -> bool {
        self.message.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
