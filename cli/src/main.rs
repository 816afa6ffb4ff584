//! Command-line entry point
//!
//! Runs the full pipeline over a ledger CSV: ingestion, fan-in smurfing
//! detection, round-trip cycle detection, tabular export.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roundtrip_detector_core::{
    detect_smurfing, load_records, write_cycles_to_path, write_smurfing_to_path, CycleTracer,
    Orchestrator, SmurfingConfig, TransactionGraph, DEFAULT_MAX_DEPTH,
};

#[derive(Debug, Parser)]
#[command(
    name = "roundtrip-detector",
    about = "Detects round-tripping cycles and fan-in smurfing in a transaction ledger"
)]
struct Cli {
    /// Input ledger CSV (SAML-D column layout)
    #[arg(long, default_value = "./data/SAML-D.csv")]
    input: PathBuf,

    /// Output CSV for detected cycles
    #[arg(long, default_value = "./data/detected_cycles.csv")]
    cycles_out: PathBuf,

    /// Output CSV for smurfing suspects
    #[arg(long, default_value = "./data/smurfing_suspects.csv")]
    smurfing_out: PathBuf,

    /// Depth bound for the cycle search
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Skip the fan-in smurfing pass
    #[arg(long)]
    skip_smurfing: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let records = load_records(&cli.input)
        .with_context(|| format!("failed to ingest ledger {}", cli.input.display()))?;

    if !cli.skip_smurfing {
        let suspects = detect_smurfing(&records, &SmurfingConfig::default());
        info!(suspects = suspects.len(), "smurfing pass finished");
        write_smurfing_to_path(&suspects, &cli.smurfing_out).with_context(|| {
            format!(
                "failed to write smurfing suspects to {}",
                cli.smurfing_out.display()
            )
        })?;
    }

    let graph = TransactionGraph::from_records(records);
    info!(
        senders = graph.sender_count(),
        transactions = graph.transaction_count(),
        "transaction graph built"
    );

    let orchestrator = Orchestrator::new(CycleTracer::new(cli.max_depth));
    let cycles = orchestrator.detect(&graph);
    info!(cycles = cycles.len(), "cycle detection finished");

    write_cycles_to_path(&cycles, &cli.cycles_out)
        .with_context(|| format!("failed to write cycles to {}", cli.cycles_out.display()))?;

    Ok(())
}
