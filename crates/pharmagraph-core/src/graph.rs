//! Mention graph construction
//!
//! Links every drug to every publication whose normalized title contains the
//! drug's normalized name as a contiguous substring. The scan is O(D × P)
//! with no indexing; drug names that are substrings of longer names match
//! independently wherever their text appears, which is accepted over-matching
//! rather than a bug.

use rayon::prelude::*;

use crate::model::{DrugNode, DrugRecord, Mention, MentionGraph, Publication, Source};

/// Build the mention graph from cleaned record collections.
///
/// Node order follows `drugs`; within a node, mentions follow `pubmed` scan
/// order, then `trials` scan order. An empty `drugs` collection yields an
/// empty graph. Drugs are scanned in parallel; since nodes are independent
/// and mention order is fixed by the publication lists, the output is
/// identical to a sequential scan.
pub fn build(
    drugs: &[DrugRecord],
    pubmed: &[Publication],
    trials: &[Publication],
) -> MentionGraph {
    drugs
        .par_iter()
        .map(|drug| DrugNode {
            drug: drug.name.clone(),
            atccode: drug.atccode.clone(),
            mentions: scan(&drug.name, pubmed)
                .chain(scan(&drug.name, trials))
                .collect(),
        })
        .collect()
}

/// One mention per publication whose title contains `name`.
///
/// Containment is boolean presence: a name occurring several times within
/// the same title still yields a single mention.
fn scan<'a>(
    name: &'a str,
    publications: &'a [Publication],
) -> impl Iterator<Item = Mention> + 'a {
    publications
        .iter()
        // An empty name would match every title ("" is a substring of
        // everything); treat it as matching nothing instead.
        .filter(move |p| !name.is_empty() && p.title.contains(name))
        .map(|p| Mention {
            source: p.source,
            journal: p.journal.clone(),
            date: p.date,
            title: p.title.clone(),
        })
}
