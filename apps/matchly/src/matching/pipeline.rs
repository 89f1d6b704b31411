//! Orchestrator: collect, truncate, validate, resolve the job description,
//! match, print. Linear, one pass, no retries.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::HR_MATCHING_SYSTEM;
use crate::llm_client::{CompletionBackend, LlmError};
use crate::matching::job_description::resolve_job_description;
use crate::matching::prompt_builder::build_match_prompt;
use crate::models::resume::{CollectionSummary, ResumePage};
use crate::resumes::collect_resumes;

/// Only the first resumes in discovery order are sent to the model.
pub const MAX_RESUMES: usize = 10;

#[derive(Debug, Clone)]
pub struct MatchRequest<'a> {
    pub data_folder: &'a Path,
    /// Literal text or a path to a file; `None` prompts on `input`.
    pub job_description: Option<&'a str>,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing to rank; the completion backend was never called.
    NoResumes,
    Matched {
        summary: CollectionSummary,
        text: String,
    },
    MatchFailed {
        summary: CollectionSummary,
        error: LlmError,
    },
}

/// Runs the whole pipeline once. Human-readable output goes to `out`;
/// interactive input, if needed, is read from `input`.
pub async fn run<B, R, W>(
    backend: &B,
    request: &MatchRequest<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<RunOutcome, AppError>
where
    B: CompletionBackend + ?Sized,
    R: BufRead,
    W: Write,
{
    let collection = collect_resumes(request.data_folder).await;
    let pdf_files_scanned = collection.pdf_files_scanned;
    let resumes = truncate(collection.pages);

    if resumes.is_empty() {
        if pdf_files_scanned > 0 {
            warn!("{pdf_files_scanned} PDF file(s) found but no pages could be extracted");
        }
        writeln!(
            out,
            "No PDF resumes found in {}. Please add some resume PDFs and try again.",
            request.data_folder.display()
        )?;
        return Ok(RunOutcome::NoResumes);
    }

    let summary = CollectionSummary::of(&resumes);
    write_summary(out, &summary, &resumes)?;

    let job_description = resolve_job_description(request.job_description, input, out)?;
    info!(
        "Job description resolved from {:?} ({} chars)",
        job_description.source,
        job_description.text.len()
    );

    let prompt = build_match_prompt(&job_description.text, &resumes);
    let result = backend.complete(&prompt, HR_MATCHING_SYSTEM).await;

    writeln!(out, "\nMatching Results:")?;
    match result {
        Ok(text) => {
            writeln!(out, "{text}")?;
            Ok(RunOutcome::Matched { summary, text })
        }
        Err(e) => {
            error!("Completion call failed: {e}");
            writeln!(out, "Error matching resumes to job: {e}")?;
            Ok(RunOutcome::MatchFailed { summary, error: e })
        }
    }
}

fn truncate(mut pages: Vec<ResumePage>) -> Vec<ResumePage> {
    if pages.len() > MAX_RESUMES {
        info!(
            "Found {} resume pages, keeping the first {MAX_RESUMES}",
            pages.len()
        );
        pages.truncate(MAX_RESUMES);
    }
    pages
}

fn write_summary<W: Write>(
    out: &mut W,
    summary: &CollectionSummary,
    resumes: &[ResumePage],
) -> std::io::Result<()> {
    writeln!(
        out,
        "Found {} resumes across {} PDF files:",
        summary.resumes, summary.pdf_files
    )?;
    for (i, resume) in resumes.iter().enumerate() {
        writeln!(
            out,
            "- Resume {}: {} (Page {})",
            i + 1,
            resume.source_file,
            resume.page
        )?;
    }
    Ok(())
}
