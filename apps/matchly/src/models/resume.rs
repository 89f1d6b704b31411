use std::collections::HashSet;
use std::path::PathBuf;

/// One page of one PDF file. Each page is ranked as its own candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumePage {
    /// Basename of the PDF the page came from.
    pub source_file: String,
    /// 1-based page number within `source_file`.
    pub page: u32,
    /// Extracted text. May be empty for image-only pages.
    pub content: String,
}

/// Where the job description text was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobDescriptionSource {
    Literal,
    File(PathBuf),
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescription {
    pub text: String,
    pub source: JobDescriptionSource,
}

/// Counts printed in the console summary before the completion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSummary {
    pub resumes: usize,
    pub pdf_files: usize,
}

impl CollectionSummary {
    pub fn of(pages: &[ResumePage]) -> Self {
        let files: HashSet<&str> = pages.iter().map(|p| p.source_file.as_str()).collect();
        Self {
            resumes: pages.len(),
            pdf_files: files.len(),
        }
    }
}
