//! Row cleaning and text normalization
//!
//! Mirrors the preparation contract the graph builder relies on: text fields
//! lowercased, trimmed, and accent-stripped; duplicate rows removed; rows
//! with missing essentials or unparseable dates dropped.

use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use unicode_normalization::UnicodeNormalization;

use pharmagraph_core::{DrugRecord, Publication, Source};

use crate::loader::{RawDrug, RawPublication};

/// Normalize a text field: trim, lowercase, strip accents.
///
/// Accent stripping is NFKD decomposition followed by dropping every
/// non-ASCII character, so "Épinéphrine" becomes "epinephrine" and
/// characters with no ASCII decomposition disappear.
pub fn normalize_text(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfkd()
        .filter(char::is_ascii)
        .collect()
}

/// Clean the drugs collection.
///
/// Duplicates are removed on the raw (atccode, drug) pair, keeping the first
/// occurrence; names are then normalized. Input order is preserved.
pub fn clean_drugs(rows: Vec<RawDrug>) -> Vec<DrugRecord> {
    let mut seen: FxHashSet<(String, String)> = FxHashSet::default();
    rows.into_iter()
        .filter(|row| seen.insert((row.atccode.clone(), row.drug.clone())))
        .map(|row| DrugRecord {
            name: normalize_text(&row.drug),
            atccode: row.atccode,
        })
        .collect()
}

/// Clean a publication collection and tag every row with `source`.
///
/// Duplicates are removed on the raw (id, title) pair; rows with an empty
/// journal, title, or date are dropped; journal and title are normalized;
/// rows whose dates match no known format are dropped with a warning.
pub fn clean_publications(rows: Vec<RawPublication>, source: Source) -> Vec<Publication> {
    let mut seen: FxHashSet<(String, String)> = FxHashSet::default();
    rows.into_iter()
        .filter(|row| seen.insert((row.id.clone(), row.title.clone())))
        .filter_map(|row| {
            if row.journal.trim().is_empty()
                || row.title.trim().is_empty()
                || row.date.trim().is_empty()
            {
                log::debug!("Dropping publication {:?}: missing essential field", row.id);
                return None;
            }
            let Some(date) = parse_date(&row.date) else {
                log::warn!(
                    "Dropping publication {:?}: unparseable date {:?}",
                    row.id,
                    row.date
                );
                return None;
            };
            Some(Publication {
                id: row.id,
                title: normalize_text(&row.title),
                journal: normalize_text(&row.journal),
                date,
                source,
            })
        })
        .collect()
}

/// Date formats observed across the source files.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d %B %Y"];

fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}
