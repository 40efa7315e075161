//! Pharmagraph Ingest - Loading and cleaning of the tabular source data
//!
//! Turns the raw drugs/PubMed/clinical-trials files into the cleaned record
//! collections the graph builder consumes: rows deserialized from CSV and
//! JSON, deduplicated, text-normalized, and date-parsed. Rows that fail
//! cleaning are dropped with a warning; missing input files are hard errors.

pub mod clean;
pub mod error;
pub mod loader;

// Re-exports for convenience
pub use clean::{clean_drugs, clean_publications, normalize_text};
pub use error::IngestError;
pub use loader::{load_clinical_trials, load_drugs, load_pubmed, RawDrug, RawPublication};
