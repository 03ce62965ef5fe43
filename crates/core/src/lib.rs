//! Core types for the folio search service
//!
//! This crate defines the foundational types used throughout the system:
//! - ContentKind: Discriminates the four searchable content types
//! - ContentRecord: Closed tagged union over the repositories' native shapes
//! - SearchableItem: The normalized, kind-agnostic shape every record becomes
//! - ScoredResult / SearchOutcome / SearchStats: Search result types
//! - Error: Error type hierarchy
//! - limits: Tuning constants (scorer weights, result limits, server defaults)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod error;
pub mod limits;
pub mod search_types;

// Re-export commonly used types
pub use content::{
    ArticleRecord, CaseStudyRecord, ContentKind, ContentRecord, HistoryRecord, PortfolioRecord,
};
pub use error::{Error, Result};
pub use search_types::{ScoredResult, SearchOutcome, SearchStats, SearchableItem};
