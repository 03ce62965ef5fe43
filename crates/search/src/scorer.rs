//! Relevance scoring
//!
//! This module provides:
//! - Scorer trait for pluggable scoring algorithms
//! - WeightedScorer, the shipped heuristic implementation
//!
//! Scoring is heuristic, not statistical: title and category matches
//! dominate, body matches accumulate, and the raw total is normalized into
//! `[0, 1]` by a fixed divisor.

use folio_core::limits::{
    BODY_OCCURRENCE_WEIGHT, BODY_WORD_WEIGHT, CATEGORY_MATCH_WEIGHT, SCORE_NORMALIZER,
    TITLE_MATCH_WEIGHT, TITLE_TOKEN_WEIGHT,
};
use regex::Regex;

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Scorers take a query and an item's text fields and return a relevance
/// score in `[0, 1]`. The result must be a deterministic pure function of its
/// inputs.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync: the orchestrator scores candidates from
/// concurrent fan-outs.
pub trait Scorer: Send + Sync {
    /// Score an item against a query
    ///
    /// `query` is trimmed and non-empty (the orchestrator rejects short
    /// queries before scoring). An absent category contributes nothing.
    fn score(&self, query: &str, title: &str, body: &str, category: Option<&str>) -> f32;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// WeightedScorer
// ============================================================================

/// Heuristic weighted scorer
///
/// Raw score accumulation (all comparisons lowercase):
/// - +100 when the title contains the query verbatim
/// - +50 per (query token, title token) pair where either contains the other
/// - +30 when the category contains the query
/// - +5 per non-overlapping occurrence of the query in the body
/// - +10 per whole-word match of each query token in the body
///
/// Final score is `min(raw / 200, 1.0)`. The divisor is a tuning parameter
/// (`limits::SCORE_NORMALIZER`); the relative weighting is the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedScorer;

impl WeightedScorer {
    /// Create a new WeightedScorer
    pub fn new() -> Self {
        WeightedScorer
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, query: &str, title: &str, body: &str, category: Option<&str>) -> f32 {
        let query = query.to_lowercase();
        if query.is_empty() {
            return 0.0;
        }
        let title = title.to_lowercase();
        let body = body.to_lowercase();

        let mut raw = 0.0f32;

        if title.contains(&query) {
            raw += TITLE_MATCH_WEIGHT;
        }

        for query_token in query.split_whitespace() {
            for title_token in title.split_whitespace() {
                if query_token.contains(title_token) || title_token.contains(query_token) {
                    raw += TITLE_TOKEN_WEIGHT;
                }
            }
        }

        if let Some(category) = category {
            if category.to_lowercase().contains(&query) {
                raw += CATEGORY_MATCH_WEIGHT;
            }
        }

        raw += body.matches(query.as_str()).count() as f32 * BODY_OCCURRENCE_WEIGHT;

        for query_token in query.split_whitespace() {
            raw += whole_word_count(query_token, &body) as f32 * BODY_WORD_WEIGHT;
        }

        (raw / SCORE_NORMALIZER).min(1.0)
    }

    fn name(&self) -> &str {
        "weighted"
    }
}

/// Count whole-word occurrences of `token` in `text`
///
/// The token is escaped before the word-boundary pattern is built, so
/// regex-special characters in user queries (`c++`, `a.b`) can never produce
/// a pattern error. A token that still fails to compile counts as zero.
fn whole_word_count(token: &str, text: &str) -> usize {
    let pattern = format!(r"\b{}\b", regex::escape(token));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(text).count(),
        Err(_) => 0,
    }
}

// ============================================================================
// Tests
// ============================================================================
