//! pharmagraph - Drug-mention graph pipeline
//!
//! Builds a graph linking drugs to the PubMed and clinical-trial
//! publications whose titles mention them, then answers aggregate queries
//! over that graph.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "pharmagraph")]
#[command(about = "Drug-mention graph pipeline over PubMed and clinical-trial data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./pharmagraph.toml or ~/.config/pharmagraph/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Load, clean, build the mention graph, and write it as JSON
    Run(cmd::run::RunArgs),
    /// Report the journal mentioning the most distinct drugs
    TopJournal(cmd::report::TopJournalArgs),
    /// Report drugs co-mentioned with a given drug in PubMed journals
    CoMentions(cmd::report::CoMentionsArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    pharmagraph_core::init_logging(cli.debug);

    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::Run(args) => cmd::run::run(args, &config),
        Command::TopJournal(args) => cmd::report::top_journal(args, &config),
        Command::CoMentions(args) => cmd::report::co_mentions(args, &config),
        Command::Config => {
            use comfy_table::{
                modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec!["Drugs CSV", &config.data.drugs.display().to_string()]);
            table.add_row(vec![
                "PubMed CSV",
                &config.data.pubmed_csv.display().to_string(),
            ]);
            table.add_row(vec![
                "PubMed JSON",
                &config.data.pubmed_json.display().to_string(),
            ]);
            table.add_row(vec![
                "Clinical trials CSV",
                &config.data.clinical_trials.display().to_string(),
            ]);
            table.add_row(vec![
                "Graph output",
                &config.output.graph.display().to_string(),
            ]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
