use thiserror::Error;

/// Application-level error type.
/// Per-file PDF failures never reach this type; they are logged and skipped
/// by the collector.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("OpenAI API key is required. Set it as an environment variable {env_var} or pass it with --api-key.")]
    MissingCredential { env_var: &'static str },

    #[error("Failed to read job description from {origin}: {source}")]
    JobDescription {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
