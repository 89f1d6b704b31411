// Resume ingestion: flat directory scan plus per-page PDF text extraction.
// PDF parsing is blocking and runs inside tokio::task::spawn_blocking.

pub mod collector;
pub mod extractor;

#[cfg(test)]
pub mod test_support;

pub use collector::collect_resumes;
