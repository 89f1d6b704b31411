use std::path::PathBuf;

use clap::Parser;

use crate::llm_client::DEFAULT_MODEL;

/// Matchly: rank PDF resumes against a job description with an LLM.
#[derive(Parser, Debug, Clone)]
#[command(name = "matchly", version, about, long_about = None)]
pub struct Cli {
    /// Folder containing resume PDFs
    #[arg(long, default_value = "data")]
    pub data_folder: PathBuf,

    /// Job description text or file path (prompted for when omitted)
    #[arg(long)]
    pub job_description: Option<String>,

    /// OpenAI API key (defaults to OPENAI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// OpenAI-compatible API base URL (defaults to OPENAI_BASE_URL, then the OpenAI API)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
