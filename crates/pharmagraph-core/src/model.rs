//! Record types for the drug-mention graph
//!
//! Inputs (`DrugRecord`, `Publication`) arrive already cleaned: text fields
//! lowercased, trimmed, and accent-stripped, dates parsed. The graph types
//! (`Mention`, `DrugNode`) serialize to the JSON artifact consumed by the
//! reporting subcommands.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the cleaned drugs table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrugRecord {
    /// Normalized drug name; the graph is keyed by this value.
    pub name: String,
    pub atccode: String,
}

/// Where a publication (and therefore a mention) came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Pubmed,
    ClinicalTrials,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pubmed => f.write_str("pubmed"),
            Self::ClinicalTrials => f.write_str("clinical_trials"),
        }
    }
}

/// One row of a cleaned publication table (PubMed or clinical trials).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub id: String,
    /// Normalized title; the builder searches this for drug names.
    pub title: String,
    /// Normalized journal name.
    pub journal: String,
    pub date: NaiveDate,
    pub source: Source,
}

/// A drug name found inside a publication title.
///
/// Field values are copied verbatim from the matched publication.
/// Immutable once created; owned by its parent [`DrugNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub source: Source,
    pub journal: String,
    /// Serializes as "YYYY-MM-DD".
    pub date: NaiveDate,
    pub title: String,
}

/// One drug and every publication mentioning it.
///
/// Mentions preserve discovery order: all PubMed matches in publication
/// order, then all clinical-trial matches in publication order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugNode {
    pub drug: String,
    pub atccode: String,
    pub mentions: Vec<Mention>,
}

/// The full graph: one node per input drug, in input order.
pub type MentionGraph = Vec<DrugNode>;

#[cfg(test)]
mod tests {
    use super::*;

    fn mention() -> Mention {
        Mention {
            source: Source::ClinicalTrials,
            journal: "journal of emergency nursing".to_string(),
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            title: "use of diphenhydramine as an adjunctive sedative".to_string(),
        }
    }

    #[test]
    fn source_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Source::Pubmed).unwrap(), "\"pubmed\"");
        assert_eq!(
            serde_json::to_string(&Source::ClinicalTrials).unwrap(),
            "\"clinical_trials\""
        );
    }

    #[test]
    fn mention_date_serializes_iso() {
        let json = serde_json::to_value(mention()).unwrap();
        assert_eq!(json["date"], "2020-01-01");
        assert_eq!(json["source"], "clinical_trials");
    }

    #[test]
    fn drug_node_round_trips_through_json() {
        let node = DrugNode {
            drug: "diphenhydramine".to_string(),
            atccode: "A04AD".to_string(),
            mentions: vec![mention()],
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: DrugNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
