//! End-to-end test: raw files on disk through cleaning, graph construction,
//! and both analysis queries.

use std::path::PathBuf;

use tempfile::TempDir;

use pharmagraph_core::{build, co_mentioned, top_journal, Source};
use pharmagraph_ingest::{
    clean_drugs, clean_publications, load_clinical_trials, load_drugs, load_pubmed,
};

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Fixture mirroring the shape of the real source files: mixed-case names,
/// an accented drug, duplicate rows, a trailing comma in the JSON export,
/// and three different date formats.
fn fixture(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf, PathBuf) {
    let drugs = write(
        dir,
        "drugs.csv",
        "atccode,drug\n\
         A1,ASPIRIN\n\
         A1,ASPIRIN\n\
         A2,IBUPROFEN\n\
         A3,ÉPINÉPHRINE\n",
    );
    let pubmed_csv = write(
        dir,
        "pubmed.csv",
        "id,title,date,journal\n\
         1,Aspirin helps,2020-01-01,The Journal J1\n\
         2,Ibuprofen and Aspirin compared,02/02/2020,The Journal J1\n\
         3,Epinephrine in anaphylaxis,3 March 2020,The Journal J2\n",
    );
    let pubmed_json = write(
        dir,
        "pubmed.json",
        "[{\"id\": 4, \"title\": \"Aspirin revisited\", \"date\": \"2020-04-01\", \"journal\": \"The Journal J2\"},\n]",
    );
    let trials = write(
        dir,
        "clinical_trials.csv",
        "id,scientific_title,date,journal\n\
         NCT01,Ibuprofen dosing trial,2020-05-01,The Journal J3\n\
         NCT02,Broken row with no date,,The Journal J3\n",
    );
    (drugs, pubmed_csv, pubmed_json, trials)
}

#[test]
fn pipeline_end_to_end() {
    let dir = TempDir::new().unwrap();
    let (drugs_path, pubmed_csv, pubmed_json, trials_path) = fixture(&dir);

    let drugs = clean_drugs(load_drugs(&drugs_path).unwrap());
    let pubmed = clean_publications(
        load_pubmed(&pubmed_csv, &pubmed_json).unwrap(),
        Source::Pubmed,
    );
    let trials = clean_publications(
        load_clinical_trials(&trials_path).unwrap(),
        Source::ClinicalTrials,
    );

    // Duplicate drug row removed, accents stripped.
    assert_eq!(drugs.len(), 3);
    assert_eq!(drugs[2].name, "epinephrine");
    // CSV rows then the repaired-JSON row.
    assert_eq!(pubmed.len(), 4);
    // Trial row without a date dropped.
    assert_eq!(trials.len(), 1);

    let graph = build(&drugs, &pubmed, &trials);
    assert_eq!(graph.len(), 3);

    // aspirin: pubmed ids 1, 2, 4; ibuprofen: pubmed 2 plus the trial;
    // epinephrine: pubmed 3.
    assert_eq!(graph[0].mentions.len(), 3);
    assert_eq!(graph[1].mentions.len(), 2);
    assert_eq!(graph[1].mentions[1].source, Source::ClinicalTrials);
    assert_eq!(graph[2].mentions.len(), 1);

    // j1 mentions aspirin and ibuprofen; j2 mentions aspirin and epinephrine
    // but is seen later.
    let top = top_journal(&graph).unwrap();
    assert_eq!(top.journal, "the journal j1");
    assert_eq!(top.unique_drugs, 2);

    // Co-mention through pubmed journals only: aspirin shares j1 with
    // ibuprofen and j2 with epinephrine.
    let co = co_mentioned(&graph, "aspirin");
    assert_eq!(co.len(), 2);
    assert!(co.contains("ibuprofen"));
    assert!(co.contains("epinephrine"));

    // Trial-only overlap never creates a co-mention.
    let co = co_mentioned(&graph, "epinephrine");
    assert_eq!(co.len(), 1);
    assert!(co.contains("aspirin"));
}

#[test]
fn rebuild_from_identical_inputs_is_identical() {
    let dir = TempDir::new().unwrap();
    let (drugs_path, pubmed_csv, pubmed_json, trials_path) = fixture(&dir);

    let drugs = clean_drugs(load_drugs(&drugs_path).unwrap());
    let pubmed = clean_publications(
        load_pubmed(&pubmed_csv, &pubmed_json).unwrap(),
        Source::Pubmed,
    );
    let trials = clean_publications(
        load_clinical_trials(&trials_path).unwrap(),
        Source::ClinicalTrials,
    );

    assert_eq!(build(&drugs, &pubmed, &trials), build(&drugs, &pubmed, &trials));
}
