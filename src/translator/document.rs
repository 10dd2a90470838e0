use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::chunker::Chunker;
use crate::error::{Result, SyncError};
use crate::model::LanguagePair;
use crate::progress::ProgressReporter;

use super::Translator;

/// Result of translating one document
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TranslatedDocument {
    pub chunks: usize,
    pub bytes_written: usize,
}

/// Chunks a document, translates the chunks one after another and writes
/// the reassembled translation.
pub struct DocumentTranslator<'a, T: Translator> {
    translator: &'a T,
    chunker: Chunker,
    languages: &'a LanguagePair,
    progress: &'a dyn ProgressReporter,
}

impl<'a, T: Translator> DocumentTranslator<'a, T> {
    pub fn new(
        translator: &'a T,
        chunker: Chunker,
        languages: &'a LanguagePair,
        progress: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            translator,
            chunker,
            languages,
            progress,
        }
    }

    /// Translate `content` chunk by chunk, joining the results with a single
    /// newline. The first failing chunk aborts the whole text.
    pub async fn translate_text(&self, content: &str) -> Result<(String, usize)> {
        self.translate_named("text", content).await
    }

    async fn translate_named(&self, name: &str, content: &str) -> Result<(String, usize)> {
        let chunks: Vec<_> = self.chunker.split(content).collect();
        let total = chunks.len();
        let mut translated = Vec::with_capacity(total);

        let progress = self.progress.document(name, total);
        for (i, chunk) in chunks.iter().enumerate() {
            info!("Translating chunk {}/{}...", i + 1, total);
            progress.chunk_started(i, total);
            if let Some(region) = chunk.starts_in {
                debug!("chunk {}/{} opens inside {:?}", i + 1, total, region);
            }

            match self.translator.translate(chunk.text, self.languages).await {
                Ok(text) => translated.push(text),
                Err(e) => {
                    progress.finish();
                    return Err(e);
                }
            }
            progress.chunk_done();
        }
        progress.finish();

        Ok((translated.join("\n"), total))
    }

    /// Translate `input` into `output`, creating parent directories of the
    /// output as needed. Nothing is written unless every chunk succeeded.
    pub async fn translate_document(&self, input: &Path, output: &Path) -> Result<TranslatedDocument> {
        info!("Translating file: {}", input.display());
        let content = fs::read_to_string(input).map_err(|e| SyncError::io(input, e))?;

        let name = input.file_name().map_or_else(|| input.to_string_lossy(), |n| n.to_string_lossy());
        let (translated, chunks) = self.translate_named(&name, &content).await?;

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
        }
        fs::write(output, &translated).map_err(|e| SyncError::io(output, e))?;

        info!("Translation complete. Output: {}", output.display());
        Ok(TranslatedDocument {
            chunks,
            bytes_written: translated.len(),
        })
    }
}
