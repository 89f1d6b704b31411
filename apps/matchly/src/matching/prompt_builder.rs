//! Prompt Builder: job description plus labeled resume blocks plus ranking instructions.

use crate::matching::prompts::{JOB_DESCRIPTION_HEADER, RANKING_INSTRUCTIONS, RESUMES_HEADER};
use crate::models::resume::ResumePage;

/// Label for the resume at 1-based `index`. The index is positional only and
/// changes if the input sequence changes.
pub fn resume_label(index: usize, resume: &ResumePage) -> String {
    format!(
        "Resume {index} (File: {}, Page: {}):",
        resume.source_file, resume.page
    )
}

/// Builds the full ranking prompt. Resume content is passed through verbatim.
pub fn build_match_prompt(job_description: &str, resumes: &[ResumePage]) -> String {
    let blocks: Vec<String> = resumes
        .iter()
        .enumerate()
        .map(|(i, resume)| format!("{}\n{}", resume_label(i + 1, resume), resume.content))
        .collect();

    format!(
        "{JOB_DESCRIPTION_HEADER}\n{job_description}\n\n{RESUMES_HEADER}\n{}\n\n{RANKING_INSTRUCTIONS}\n",
        blocks.join("\n\n")
    )
}
