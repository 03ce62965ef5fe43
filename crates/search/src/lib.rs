//! Heterogeneous relevance search for folio
//!
//! This crate provides:
//! - Scorer trait for pluggable scoring algorithms
//! - WeightedScorer, the shipped heuristic implementation
//! - Result normalization from native records to SearchableItem
//! - Suggestion generation for thin result sets
//! - SearchOrchestrator, the fan-out / score / rank pipeline
//!
//! # Usage
//!
//! ```ignore
//! use folio_search::SearchOrchestrator;
//!
//! let orchestrator = SearchOrchestrator::new(articles, portfolio, case_studies, history);
//! let outcome = orchestrator.search("marketing", 20).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod normalize;
pub mod orchestrator;
pub mod scorer;
pub mod suggest;

// Re-export commonly used items
pub use normalize::normalize;
pub use orchestrator::SearchOrchestrator;
pub use scorer::{Scorer, WeightedScorer};
pub use suggest::suggest;
