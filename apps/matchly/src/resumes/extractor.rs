//! PDF Text Extractor: one `ResumePage` per PDF page, numbered from 1.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::resume::ResumePage;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// Extracts every page of `path`. Failures are logged and yield no pages;
/// nothing escapes this boundary, including parser panics.
pub async fn extract_resume_pages(path: &Path) -> Vec<ResumePage> {
    match extract_pages(path).await {
        Ok(pages) => {
            debug!("Extracted {} page(s) from {}", pages.len(), path.display());
            pages
        }
        Err(e) => {
            warn!("Error extracting text from {}: {e}", path.display());
            Vec::new()
        }
    }
}

/// Typed variant of [`extract_resume_pages`]. The whole file succeeds or fails
/// together.
pub async fn extract_pages(path: &Path) -> Result<Vec<ResumePage>, ExtractError> {
    let source_file = basename(path);
    let owned = path.to_path_buf();

    let texts = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_by_pages(&owned).map_err(|e| ExtractError::Pdf(e.to_string()))
    })
    .await
    .map_err(|e| ExtractError::Aborted(e.to_string()))??;

    Ok(texts
        .into_iter()
        .zip(1u32..)
        .map(|(content, page)| ResumePage {
            source_file: source_file.clone(),
            page,
            content,
        })
        .collect())
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
