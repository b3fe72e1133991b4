use clap::Parser;
use tcr_graph_core::{db, graph, render};

/// tcr-graph - Graph construction and AIRR knowledge base walkthrough
#[derive(Parser)]
#[command(name = "tcr-graph")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(about = "Print a sample dependency graph and query the AIRR knowledge base", long_about = None)]
struct Cli {
    /// PostgreSQL connection string for the AIRR knowledge base
    #[arg(long, default_value = db::DEFAULT_DATABASE_URL)]
    database_url: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let g = graph::sample_digraph();
    print!("{}", render::report(&g));

    let receptors = db::fetch_receptors(&cli.database_url)?;
    // An empty table prints nothing for this step
    if let Some(first) = receptors.first() {
        println!("{}", first.summary());
    }

    Ok(())
}
