//! Resume Collector: flat `*.pdf` scan of one directory.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::models::resume::ResumePage;
use crate::resumes::extractor::extract_resume_pages;

/// Pages gathered from a data folder, in discovery order.
#[derive(Debug, Default)]
pub struct Collection {
    pub pages: Vec<ResumePage>,
    pub pdf_files_scanned: usize,
}

/// Extracts every `*.pdf` in `data_folder` (non-recursive) and concatenates
/// their pages in directory-listing order. An empty or missing folder is not
/// an error.
pub async fn collect_resumes(data_folder: &Path) -> Collection {
    let pdf_files = find_pdf_files(data_folder);
    let mut pages = Vec::new();

    for pdf_file in &pdf_files {
        pages.extend(extract_resume_pages(pdf_file).await);
    }

    info!(
        "Scanned {} PDF file(s) in {}, {} page(s) extracted",
        pdf_files.len(),
        data_folder.display(),
        pages.len()
    );

    Collection {
        pages,
        pdf_files_scanned: pdf_files.len(),
    }
}

/// Regular files directly inside `dir` whose name ends in `.pdf`.
/// Dotfiles are skipped, matching shell glob semantics.
pub fn find_pdf_files(dir: &Path) -> Vec<PathBuf> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            warn!("Cannot list {}: {e}", dir.display());
            return Vec::new();
        }
    };

    read_dir
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| is_pdf_file(path))
        .collect()
}

fn is_pdf_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    !name.starts_with('.')
        && path.extension().and_then(|e| e.to_str()) == Some("pdf")
        && path.is_file()
}
