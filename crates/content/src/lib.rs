//! Content repositories for the folio search service
//!
//! This crate provides:
//! - ContentRepository: the black-box contract the search orchestrator
//!   fans out to (one repository per content kind)
//! - MemoryContentStore: an in-memory, lock-guarded implementation
//!
//! Repositories are read-only from the search subsystem's point of view:
//! the orchestrator only ever calls `find_matching`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod repository;

pub use memory::MemoryContentStore;
pub use repository::ContentRepository;
