//! Paperless document tool CLI entry point.
//!
//! This binary is the composition root for the workspace. Responsibilities:
//!
//! 1. **Load configuration** — `.env` via dotenvy, then defaults, an optional
//!    `paperless.toml`, and `PAPERLESS_*` environment variables.
//! 2. **Wire observability** — `tracing-subscriber` with a pretty or JSON layer
//!    and, when `OTEL_EXPORTER_OTLP_ENDPOINT` is set, an OTLP exporter.
//! 3. **Run one retrieval** — build the [`PaperlessTool`], run it with a
//!    stderr event sink, and print the result string on stdout.
//!
//! The exit code is `0` when the result decodes as a document collection and
//! `1` otherwise (empty result or error message).

mod settings;
mod sink;
mod telemetry;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use documents::decode_documents;
use reporter::PaperlessTool;
use tracing::info;

use crate::sink::StderrSink;

/// Retrieve documents from a Paperless instance.
#[derive(Debug, Parser)]
#[command(name = "paperless-docs", version, about)]
struct Cli {
    /// Document type to search for (case-insensitive substring).
    #[arg(long = "type")]
    document_type: String,

    /// Tag to filter by (case-insensitive substring).
    #[arg(long)]
    tag: Option<String>,

    /// Creation year; defaults to the current year.
    #[arg(long)]
    year: Option<i32>,

    /// Creation month (1-12); defaults to the current month.
    #[arg(long)]
    month: Option<u32>,

    /// Settings file (TOML). Defaults to `paperless.toml` if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let _telemetry = telemetry::init(cli.json_logs)?;

    let settings =
        settings::load_settings(cli.config.as_deref()).context("failed to load settings")?;
    info!(paperless_url = %settings.paperless_url, "Loaded settings");

    let tool = PaperlessTool::from_settings(&settings);
    let result = tool
        .get_paperless_documents(
            &cli.document_type,
            cli.tag.as_deref(),
            cli.year,
            cli.month,
            Some(&StderrSink),
        )
        .await;

    println!("{result}");

    Ok(if decode_documents(&result).is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
