//! Validated run configuration
//!
//! Everything a run needs is carried in [`Config`] and handed to the
//! coordinator explicitly.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Result, SyncError};
use crate::model::LanguagePair;
use crate::translator::BackendConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    pub state_file: PathBuf,
    pub log_file: PathBuf,
    pub languages: LanguagePair,
    /// Maximum chunk size in characters
    pub chunk_limit: usize,
    pub backend: BackendConfig,
    pub verbose: bool,
}

impl Config {
    /// Validate command-line options into a run configuration
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let api_key = cli
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| SyncError::Configuration("OPENAI_API_KEY is not set".to_string()))?;

        if cli.chunk_limit == 0 {
            return Err(SyncError::Configuration("chunk limit must be positive".to_string()));
        }
        if cli.max_tokens == 0 {
            return Err(SyncError::Configuration("max tokens must be positive".to_string()));
        }
        if !cli.source.is_dir() {
            return Err(SyncError::Configuration(format!(
                "source directory {} does not exist",
                cli.source.display()
            )));
        }

        Ok(Self {
            source_root: cli.source,
            target_root: cli.target,
            state_file: cli.state_file,
            log_file: cli.log_file,
            languages: LanguagePair::new(cli.source_lang, cli.target_lang),
            chunk_limit: cli.chunk_limit,
            backend: BackendConfig {
                api_key,
                base_url: cli.api_base,
                model: cli.model,
                max_tokens: cli.max_tokens,
            },
            verbose: !cli.quiet,
        })
    }
}
