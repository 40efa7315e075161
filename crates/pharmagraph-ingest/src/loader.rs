//! Raw row loading from CSV and JSON sources

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::error::IngestError;

/// One raw row of the drugs CSV, before cleaning.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDrug {
    pub atccode: String,
    pub drug: String,
}

/// One raw publication row (PubMed CSV/JSON or clinical trials CSV).
///
/// Clinical-trials files name their title column `scientific_title`; the
/// alias folds both schemas into one field. JSON ids occasionally arrive as
/// numbers or are absent entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPublication {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "scientific_title")]
    pub title: String,
    pub date: String,
    pub journal: String,
}

/// Accept a string or a bare number for an id field.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Str(String),
        Num(i64),
    }

    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Str(s) => s,
        IdValue::Num(n) => n.to_string(),
    })
}

/// Load the drugs CSV.
pub fn load_drugs(path: &Path) -> Result<Vec<RawDrug>, IngestError> {
    read_csv(path)
}

/// Load PubMed rows from both the CSV and JSON sources, CSV rows first.
pub fn load_pubmed(
    csv_path: &Path,
    json_path: &Path,
) -> Result<Vec<RawPublication>, IngestError> {
    let mut rows: Vec<RawPublication> = read_csv(csv_path)?;
    let mut json_rows = read_json(json_path)?;
    log::debug!(
        "Loaded {} PubMed rows from CSV, {} from JSON",
        rows.len(),
        json_rows.len()
    );
    rows.append(&mut json_rows);
    Ok(rows)
}

/// Load the clinical trials CSV.
pub fn load_clinical_trials(path: &Path) -> Result<Vec<RawPublication>, IngestError> {
    read_csv(path)
}

fn read_csv<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, IngestError> {
    if !path.exists() {
        return Err(IngestError::MissingInput(path.to_path_buf()));
    }
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| IngestError::Csv(path.to_path_buf(), e))?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| IngestError::Csv(path.to_path_buf(), e))
}

/// Matches a comma followed only by whitespace and a closing bracket/brace.
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[\]}])").expect("invalid trailing-comma regex"));

fn read_json(path: &Path) -> Result<Vec<RawPublication>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::MissingInput(path.to_path_buf())
        } else {
            IngestError::Io(path.to_path_buf(), e)
        }
    })?;

    match serde_json::from_str(&content) {
        Ok(rows) => Ok(rows),
        Err(first_err) => {
            // Exports in the wild carry trailing commas; repair and retry
            // once before giving up.
            log::warn!(
                "{} is not valid JSON ({first_err}), retrying with trailing commas stripped",
                path.display()
            );
            let repaired = TRAILING_COMMA.replace_all(&content, "$1");
            serde_json::from_str(&repaired)
                .map_err(|e| IngestError::Json(path.to_path_buf(), e))
        }
    }
}
