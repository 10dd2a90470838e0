use clap::Parser;
use std::path::PathBuf;

use crate::chunker::DEFAULT_CHUNK_LIMIT;
use crate::translator::{DEFAULT_API_BASE, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

#[derive(Parser, Debug)]
#[command(name = "mdsync", about = "Incrementally translate a tree of markdown documents")]
pub struct Cli {
    /// Directory holding the source documents
    pub source: PathBuf,

    /// Directory receiving the translated documents
    pub target: PathBuf,

    /// File recording when the last run completed
    #[arg(long, default_value = "exec_date_translation.txt")]
    pub state_file: PathBuf,

    /// Log file (appended to)
    #[arg(long, default_value = "translator.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = "English")]
    pub source_lang: String,

    #[arg(long, default_value = "Japanese")]
    pub target_lang: String,

    /// Maximum chunk size in characters
    #[arg(long, default_value_t = DEFAULT_CHUNK_LIMIT)]
    pub chunk_limit: usize,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum tokens per translation response
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    #[arg(long, env = "OPENAI_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Hide progress bars
    #[arg(long)]
    pub quiet: bool,
}
