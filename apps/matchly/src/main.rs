mod cli;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod resumes;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::pipeline::{self, MatchRequest, RunOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration first (fails on a missing API key before any I/O)
    let config = Config::from_cli(&cli)?;

    // Structured logging on stderr; stdout carries only the report
    let filter = if cli.verbose {
        EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME")))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        })
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Matchly v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.llm.clone())?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm.model(),
        config.llm.base_url
    );

    let request = MatchRequest {
        data_folder: &config.data_folder,
        job_description: config.job_description.as_deref(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = pipeline::run(&llm, &request, &mut stdin.lock(), &mut stdout.lock()).await?;

    match outcome {
        RunOutcome::NoResumes => Ok(ExitCode::SUCCESS),
        RunOutcome::Matched { summary, text } => {
            info!(
                "Ranked {} resume(s) from {} PDF file(s), {} chars returned",
                summary.resumes,
                summary.pdf_files,
                text.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        // Already reported on stdout and in the log by the pipeline.
        RunOutcome::MatchFailed { summary, error } => {
            info!("No ranking produced for {} resume(s)", summary.resumes);
            debug!("Completion error detail: {error:?}");
            Ok(ExitCode::FAILURE)
        }
    }
}
