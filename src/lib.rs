//! folio - relevance search for heterogeneous portfolio content
//!
//! Folio unifies four independently-shaped content stores (blog articles,
//! portfolio projects, case studies, work history) into one ranked search
//! surface, served over HTTP.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio::{ContentKind, MemoryContentStore, SearchOrchestrator};
//! use std::sync::Arc;
//!
//! let articles = Arc::new(MemoryContentStore::new(ContentKind::Article));
//! let portfolio = Arc::new(MemoryContentStore::new(ContentKind::Portfolio));
//! let case_studies = Arc::new(MemoryContentStore::new(ContentKind::CaseStudy));
//! let history = Arc::new(MemoryContentStore::new(ContentKind::History));
//!
//! let orchestrator = SearchOrchestrator::new(articles, portfolio, case_studies, history);
//! let outcome = orchestrator.search("marketing", 20).await?;
//! ```
//!
//! # Architecture
//!
//! Repositories pre-filter candidates by substring match; the orchestrator
//! normalizes every candidate into a kind-agnostic item, scores it with a
//! pure heuristic scorer, ranks, truncates, and derives suggestions when the
//! result set is thin. The HTTP layer in `folio-server` is a thin envelope
//! over the orchestrator.

// Re-export the public API from the member crates
pub use folio_core::*;

pub use folio_content::{ContentRepository, MemoryContentStore};

pub use folio_search::{normalize, suggest, Scorer, SearchOrchestrator, WeightedScorer};

pub use folio_server::handlers::AppState;
pub use folio_server::create_router;
