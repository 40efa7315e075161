//! Reporting subcommands over a previously written graph JSON

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};

use pharmagraph_core::{AnalysisError, MentionGraph};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct TopJournalArgs {
    /// Graph JSON path (default: the configured output path)
    #[arg(long)]
    pub graph: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CoMentionsArgs {
    /// Normalized drug name to query
    pub drug: String,

    /// Graph JSON path (default: the configured output path)
    #[arg(long)]
    pub graph: Option<PathBuf>,
}

fn load_graph(path: &Path) -> Result<MentionGraph> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open graph file: {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to parse graph file: {}", path.display()))
}

pub fn top_journal(args: TopJournalArgs, config: &Config) -> Result<()> {
    let path = args.graph.unwrap_or_else(|| config.output.graph.clone());
    let graph = load_graph(&path)?;

    match pharmagraph_core::top_journal(&graph) {
        Ok(top) => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Journal").fg(Color::Cyan),
                    Cell::new("Distinct drugs").fg(Color::Cyan),
                ]);
            table.add_row(vec![top.journal, top.unique_drugs.to_string()]);
            println!("{table}");
        }
        Err(AnalysisError::EmptyGraph) => {
            // A mention-free graph is a no-data condition, not a failure.
            println!("No data: the graph contains no mentions.");
        }
    }
    Ok(())
}

pub fn co_mentions(args: CoMentionsArgs, config: &Config) -> Result<()> {
    let path = args.graph.unwrap_or_else(|| config.output.graph.clone());
    let graph = load_graph(&path)?;

    let mut co: Vec<String> = pharmagraph_core::co_mentioned(&graph, &args.drug)
        .into_iter()
        .collect();
    co.sort_unstable();

    if co.is_empty() {
        // Lookup misses and drugs with no overlap both land here.
        println!("No drugs co-mentioned with '{}'.", args.drug);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new(format!("Co-mentioned with '{}'", args.drug)).fg(Color::Cyan)
        ]);
    for name in co {
        table.add_row(vec![name]);
    }
    println!("{table}");
    Ok(())
}
