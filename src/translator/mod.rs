//! Translation of text and whole documents
//!
//! - **Translator**: the backend capability, one text blob in, one out
//! - **openai**: chat-completions implementation of `Translator`
//! - **document**: chunk, translate sequentially, reassemble, write

mod document;
mod openai;

pub use document::{DocumentTranslator, TranslatedDocument};
pub use openai::{BackendConfig, DEFAULT_API_BASE, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, OpenAiTranslator};

use crate::error::Result;
use crate::model::LanguagePair;

/// A translation backend.
///
/// Implementations make exactly one attempt per call; a failure is returned
/// as [`SyncError::Backend`](crate::error::SyncError::Backend) and retrying
/// is left to the caller.
#[allow(async_fn_in_trait)]
pub trait Translator {
    async fn translate(&self, text: &str, languages: &LanguagePair) -> Result<String>;
}

/// First `max_chars` characters of `text`, for log previews
pub(crate) fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
