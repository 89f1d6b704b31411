use std::path::PathBuf;

use crate::cli::Cli;
use crate::errors::AppError;
use crate::llm_client::{LlmConfig, DEFAULT_BASE_URL};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Application configuration resolved from CLI flags, then environment.
/// Fails before any I/O if no API key can be found.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_folder: PathBuf,
    pub job_description: Option<String>,
    pub llm: LlmConfig,
    /// Level for this crate when RUST_LOG is unset; `--verbose` forces debug.
    pub rust_log: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Resolution with an injectable environment lookup.
    pub fn resolve<F>(cli: &Cli, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = cli
            .api_key
            .clone()
            .or_else(|| env(API_KEY_ENV))
            .filter(|key| !key.trim().is_empty())
            .ok_or(AppError::MissingCredential {
                env_var: API_KEY_ENV,
            })?;

        let base_url = cli
            .base_url
            .clone()
            .or_else(|| env(BASE_URL_ENV))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let default_level = if cli.verbose { "debug" } else { "info" };

        Ok(Config {
            data_folder: cli.data_folder.clone(),
            job_description: cli.job_description.clone(),
            llm: LlmConfig {
                api_key,
                model: cli.model.clone(),
                base_url,
            },
            rust_log: default_level.to_string(),
        })
    }
}
