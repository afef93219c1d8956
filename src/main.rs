//! adt1-extract - Entry point
//!
//! Extracts structured fields from an MCA Form ADT-1 PDF into a JSON record,
//! optionally with a short natural-language summary.

use adt1_extract::{config, extract, PdfReader, RunConfig, Summarizer};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "adt1-extract",
    about = "Extract structured auditor-appointment fields from MCA Form ADT-1 PDFs"
)]
struct Cli {
    /// Input ADT-1 PDF file
    #[arg(value_name = "PDF")]
    input: PathBuf,

    /// Output JSON record file
    #[arg(short, long, value_name = "FILE", default_value = "output.json")]
    output: PathBuf,

    /// Also write a short natural-language summary to this file
    /// (requires OPENAI_API_KEY)
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Model used for the summary call
    #[arg(long, value_name = "MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adt1_extract=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Resolves the API credential when a summary is requested, so a missing
    // key aborts before any PDF work
    let config = RunConfig::new(cli.input, cli.output, cli.summary, cli.model)?;

    run(config).await
}

async fn run(config: RunConfig) -> anyhow::Result<()> {
    tracing::info!(input = %config.input.display(), "decoding PDF");
    let reader = PdfReader::open(&config.input)?;
    tracing::info!(pages = reader.page_count(), "decoded PDF");

    let record = extract::extract_record(reader.pages());

    let json = record.to_json_pretty()?;
    std::fs::write(&config.output, json + "\n")?;
    println!("Structured data saved to {}", config.output.display());

    if let Some(summary_config) = &config.summary {
        tracing::info!(model = %summary_config.model, "requesting summary");
        let summarizer = Summarizer::new(summary_config)?;
        let summary = summarizer.summarize(&record).await?;

        std::fs::write(&summary_config.output, summary + "\n")?;
        println!("Summary saved to {}", summary_config.output.display());
    }

    Ok(())
}
