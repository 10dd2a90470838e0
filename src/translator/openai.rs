//! OpenAI chat-completions backend

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{Result, SyncError};
use crate::model::LanguagePair;

use super::{Translator, preview};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Connection settings for the translation backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

/// Chat request body
#[derive(Debug, Clone, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Clone, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// System instruction sent with every chunk
fn system_prompt(languages: &LanguagePair) -> String {
    format!(
        "You are a professional translator. Translate the following {} markdown text to {}, preserving the markdown format.",
        languages.source, languages.target
    )
}

/// Translator backed by an OpenAI-compatible chat-completions API
#[derive(Debug, Clone)]
pub struct OpenAiTranslator {
    config: BackendConfig,
    http_client: reqwest::Client,
}

impl OpenAiTranslator {
    /// Create a client. No request timeout is set; the backend's own limits
    /// apply.
    pub fn new(config: BackendConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| SyncError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    async fn request(&self, text: &str, languages: &LanguagePair) -> Result<String> {
        let system = system_prompt(languages);
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                Message { role: "system", content: &system },
                Message { role: "user", content: text },
            ],
            max_tokens: self.config.max_tokens,
            temperature: 0.0,
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SyncError::backend(format!("failed to send request: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SyncError::backend(format!("failed to read response: {e}")))?;

        parse_response(status.as_u16(), &body)
    }
}

impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str, languages: &LanguagePair) -> Result<String> {
        info!("translation started: {}...", preview(text, 50));

        match self.request(text, languages).await {
            Ok(translated) => {
                info!("translation finished");
                Ok(translated)
            }
            Err(e) => {
                error!("API request failed: {e}");
                Err(e)
            }
        }
    }
}

/// Map an HTTP status and body to the translated text
fn parse_response(status: u16, body: &str) -> Result<String> {
    if !(200..300).contains(&status) {
        return Err(SyncError::Backend {
            status: Some(status),
            detail: format!("request failed with status {status}: {body}"),
        });
    }

    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| SyncError::backend(format!("failed to parse response: {e}")))?;

    response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| SyncError::backend("no choices in response"))?
        .message
        .content
        .ok_or_else(|| SyncError::backend("no content in response"))
}
