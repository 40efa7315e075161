//! Pharmagraph Core - Drug-mention graph construction and analysis
//!
//! This crate holds the in-memory data model linking drugs to the
//! publications whose titles mention them, the builder that produces it,
//! and the aggregation queries that run over it. All I/O lives in the
//! ingest and CLI crates; everything here is pure computation over
//! already-cleaned records.

pub mod analysis;
pub mod error;
pub mod graph;
pub mod logging;
pub mod model;

// Re-exports for convenience
pub use analysis::{co_mentioned, top_journal, TopJournal};
pub use error::AnalysisError;
pub use graph::build;
pub use logging::init_logging;
pub use model::{DrugNode, DrugRecord, Mention, MentionGraph, Publication, Source};
