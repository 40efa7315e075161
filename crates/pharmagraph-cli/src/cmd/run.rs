//! Run subcommand - full pipeline from source files to graph JSON

use anyhow::{Context, Result};
use clap::Args;

use pharmagraph_core::{build, co_mentioned, top_journal, AnalysisError, Source};
use pharmagraph_ingest::{
    clean_drugs, clean_publications, load_clinical_trials, load_drugs, load_pubmed,
};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Also print drugs co-mentioned with this drug (normalized name)
    #[arg(long)]
    pub drug: Option<String>,
}

pub fn run(args: RunArgs, config: &Config) -> Result<()> {
    let drugs = clean_drugs(load_drugs(&config.data.drugs).context("loading drugs")?);
    let pubmed = clean_publications(
        load_pubmed(&config.data.pubmed_csv, &config.data.pubmed_json)
            .context("loading PubMed publications")?,
        Source::Pubmed,
    );
    let trials = clean_publications(
        load_clinical_trials(&config.data.clinical_trials)
            .context("loading clinical trials")?,
        Source::ClinicalTrials,
    );
    log::info!(
        "Cleaned input: {} drugs, {} PubMed publications, {} clinical trials",
        drugs.len(),
        pubmed.len(),
        trials.len()
    );

    let graph = build(&drugs, &pubmed, &trials);
    let total_mentions: usize = graph.iter().map(|n| n.mentions.len()).sum();
    log::info!("Built graph: {} nodes, {total_mentions} mentions", graph.len());

    if let Some(parent) = config.output.graph.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output dir: {}", parent.display())
        })?;
    }
    let file = std::fs::File::create(&config.output.graph).with_context(|| {
        format!("Failed to create {}", config.output.graph.display())
    })?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &graph)
        .context("Failed to write graph JSON")?;
    log::info!("Wrote graph to {}", config.output.graph.display());

    match top_journal(&graph) {
        Ok(top) => {
            println!(
                "Top journal: {} ({} distinct drugs)",
                top.journal, top.unique_drugs
            );
        }
        Err(AnalysisError::EmptyGraph) => {
            println!("Top journal: no data (graph contains no mentions)");
        }
    }

    if let Some(drug) = args.drug {
        let mut co: Vec<String> = co_mentioned(&graph, &drug).into_iter().collect();
        co.sort_unstable();
        println!("Co-mentioned with '{drug}': {}", format_list(&co));
    }

    Ok(())
}

pub fn format_list(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
