//! Batch ticket-reply evaluation entry point.
//!
//! Reads `docs/tickets.csv`, evaluates every ticket/reply pair through the
//! configured model, writes `tickets_evaluated.csv` into the working
//! directory, and prints a short preview of the results. Configuration comes
//! from the environment (see [`EvaluatorConfig::from_env`]), optionally
//! seeded from a local `.env` file.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use replyscore_core::OUTPUT_FILENAME;
use replyscore_runtime::{EvaluatorConfig, TicketEvaluator};

/// Fixed input table evaluated on every run.
const INPUT_FILE: &str = "docs/tickets.csv";

/// Number of result rows echoed after the run.
const PREVIEW_ROWS: usize = 5;

/// Score customer-service replies with an LLM and write a `;`-delimited report.
#[derive(Parser)]
#[command(name = "replyscore", version, about)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse();

    // Pick up OPENAI_API_KEY / MODEL_NAME from a local .env when present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EvaluatorConfig::from_env().context("Loading configuration from environment")?;

    let evaluator = TicketEvaluator::from_csv_path(config, INPUT_FILE)
        .with_context(|| format!("Loading input table '{}'", INPUT_FILE))?;

    let report = evaluator.process_all().await;

    report
        .write_csv_file(OUTPUT_FILENAME)
        .with_context(|| format!("Writing report '{}'", OUTPUT_FILENAME))?;

    println!("Evaluation complete. Results saved to '{}'", OUTPUT_FILENAME);
    println!();
    println!("First evaluations:");
    print!("{}", report.preview(PREVIEW_ROWS));

    Ok(())
}
