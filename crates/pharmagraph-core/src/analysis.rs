//! Aggregation queries over the mention graph

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::{DrugNode, Source};

/// Result of [`top_journal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopJournal {
    pub journal: String,
    pub unique_drugs: usize,
}

/// Find the journal mentioning the most distinct drugs, any source.
///
/// Ties are broken deterministically: the winner is the journal first
/// encountered while scanning nodes in graph order and mentions in
/// within-node order. Returns [`AnalysisError::EmptyGraph`] when no node
/// has any mention.
pub fn top_journal(graph: &[DrugNode]) -> Result<TopJournal, AnalysisError> {
    // First-seen journal order alongside the hash map, so tie-breaking does
    // not depend on hash iteration order.
    let mut order: Vec<&str> = Vec::new();
    let mut journal_drugs: FxHashMap<&str, FxHashSet<&str>> = FxHashMap::default();

    for node in graph {
        for mention in &node.mentions {
            journal_drugs
                .entry(mention.journal.as_str())
                .or_insert_with(|| {
                    order.push(mention.journal.as_str());
                    FxHashSet::default()
                })
                .insert(node.drug.as_str());
        }
    }

    let mut best: Option<TopJournal> = None;
    for journal in order {
        let count = journal_drugs[journal].len();
        // Strict comparison keeps the first journal on ties.
        if best.as_ref().is_none_or(|b| count > b.unique_drugs) {
            best = Some(TopJournal {
                journal: journal.to_string(),
                unique_drugs: count,
            });
        }
    }
    best.ok_or(AnalysisError::EmptyGraph)
}

/// Find every other drug sharing at least one PubMed journal with `drug_name`.
///
/// Only PubMed-sourced mentions count on both sides; clinical-trial-only
/// overlap never produces a co-mention. An unknown `drug_name` returns an
/// empty set (lookup miss, not an error). Every node whose name equals
/// `drug_name` is treated as self and excluded, so duplicate-name drugs with
/// different atc codes are conflated.
pub fn co_mentioned(graph: &[DrugNode], drug_name: &str) -> FxHashSet<String> {
    let query_journals = match graph.iter().find(|n| n.drug == drug_name) {
        Some(node) => pubmed_journals(node),
        None => return FxHashSet::default(),
    };

    let mut co_drugs = FxHashSet::default();
    for node in graph {
        if node.drug == drug_name {
            continue;
        }
        if pubmed_journals(node)
            .intersection(&query_journals)
            .next()
            .is_some()
        {
            co_drugs.insert(node.drug.clone());
        }
    }
    co_drugs
}

/// Distinct journals in which a node has at least one PubMed mention.
fn pubmed_journals(node: &DrugNode) -> FxHashSet<&str> {
    node.mentions
        .iter()
        .filter(|m| m.source == Source::Pubmed)
        .map(|m| m.journal.as_str())
        .collect()
}
