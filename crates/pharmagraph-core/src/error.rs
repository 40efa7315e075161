//! Error type for graph analysis queries

/// Error from an aggregation query over the mention graph.
#[derive(Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The graph contains no mentions at all, so there is no journal to
    /// select. Raised by [`crate::top_journal`]; an absent drug name in
    /// [`crate::co_mentioned`] is a normal empty result, not this error.
    EmptyGraph,
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGraph => f.write_str("graph contains no mentions"),
        }
    }
}

impl std::error::Error for AnalysisError {}
