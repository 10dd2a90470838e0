//! Run coordinator
//!
//! Walks the source tree and takes every markdown document through
//! planning, translation and verification, then records the run.
//!
//! `Idle -> Walking -> (Planning -> [Translating] -> Verifying)* -> Finalizing -> Done`
//!
//! A document whose translation fails is logged and counted, and the walk
//! moves on. RunState only advances when no document failed, so failed
//! documents are picked up again by the next run.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::chunker::Chunker;
use crate::config::Config;
use crate::error::{Result, SyncError};
use crate::model::{FileOutcome, RunSummary, SyncDecision, Verification};
use crate::progress::{NoopProgress, ProgressReporter};
use crate::repository::{LastModified, RunStateStore, SyncPlanner};
use crate::translator::{DocumentTranslator, Translator};
use crate::util::{format_size, format_timestamp, is_markdown, mirror_path, now_timestamp};
use crate::verifier::{PatternCounter, StructureCounter};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RunPhase {
    Idle,
    Walking,
    Planning,
    Translating,
    Verifying,
    Finalizing,
    Done,
}

/// A source document and its mirrored output location
#[derive(Debug, Clone)]
struct DocumentPaths {
    relative: PathBuf,
    source: PathBuf,
    target: PathBuf,
}

pub struct RunCoordinator<'a, T: Translator, O: LastModified, S: RunStateStore> {
    config: &'a Config,
    translator: &'a T,
    oracle: &'a O,
    store: &'a S,
    counter: Box<dyn StructureCounter + 'a>,
    progress: Box<dyn ProgressReporter + 'a>,
    phase: Cell<RunPhase>,
}

impl<'a, T: Translator, O: LastModified, S: RunStateStore> RunCoordinator<'a, T, O, S> {
    pub fn new(config: &'a Config, translator: &'a T, oracle: &'a O, store: &'a S) -> Self {
        Self {
            config,
            translator,
            oracle,
            store,
            counter: Box::new(PatternCounter),
            progress: Box::new(NoopProgress),
            phase: Cell::new(RunPhase::Idle),
        }
    }

    /// Replace the structural counter used for verification
    pub fn with_counter(mut self, counter: impl StructureCounter + 'a) -> Self {
        self.counter = Box::new(counter);
        self
    }

    pub fn with_progress(mut self, progress: impl ProgressReporter + 'a) -> Self {
        self.progress = Box::new(progress);
        self
    }

    pub fn phase(&self) -> RunPhase {
        self.phase.get()
    }

    fn enter(&self, phase: RunPhase) {
        debug!("phase {:?} -> {:?}", self.phase.get(), phase);
        self.phase.set(phase);
    }

    /// Run one pass over the source tree.
    ///
    /// Only run-level problems are returned as errors: an unreadable source
    /// root or RunState. Per-document failures end up in the summary.
    pub async fn run(&self) -> Result<RunSummary> {
        self.enter(RunPhase::Walking);
        let last_run = self.store.load()?;
        info!(
            "Translation run started: {} (last run: {})",
            self.config.languages,
            format_timestamp(last_run)
        );

        let planner = SyncPlanner::new(last_run);
        let documents = self.collect_documents()?;
        debug!("{} markdown documents under {}", documents.len(), self.config.source_root.display());

        let translator = DocumentTranslator::new(
            self.translator,
            Chunker::new(self.config.chunk_limit),
            &self.config.languages,
            self.progress.as_ref(),
        );

        let mut summary = RunSummary::default();
        for doc in &documents {
            let outcome = self.process(&planner, &translator, doc).await?;
            summary.record(&outcome);
        }

        self.enter(RunPhase::Finalizing);
        if summary.is_clean() {
            let now = now_timestamp();
            self.store.save(now)?;
            summary.recorded_run = Some(now);
        } else {
            warn!(
                "{} documents failed; keeping last run time {} so they are retried",
                summary.failed.len(),
                format_timestamp(last_run)
            );
            for path in &summary.failed {
                warn!("  failed: {}", path.display());
            }
        }

        self.enter(RunPhase::Done);
        info!("All files processed. {}", summary);
        Ok(summary)
    }

    /// Markdown files under the source root, in file-name order
    fn collect_documents(&self) -> Result<Vec<DocumentPaths>> {
        let source_root = &self.config.source_root;
        let target_root = &self.config.target_root;
        let mut documents = Vec::new();

        let walker = WalkDir::new(source_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.path().starts_with(target_root));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(SyncError::io(source_root, e.into()));
                }
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !is_markdown(path) {
                continue;
            }
            if let Some((relative, target)) = mirror_path(source_root, target_root, path) {
                documents.push(DocumentPaths {
                    relative,
                    source: path.to_path_buf(),
                    target,
                });
            }
        }

        Ok(documents)
    }

    async fn process(
        &self,
        planner: &SyncPlanner,
        translator: &DocumentTranslator<'_, T>,
        doc: &DocumentPaths,
    ) -> Result<FileOutcome> {
        self.enter(RunPhase::Planning);
        let decision = planner.plan(&doc.source, &doc.target, self.oracle);
        let mut error = None;

        match decision {
            SyncDecision::Translate(_) => {
                info!("Translating: {} ({})", doc.relative.display(), decision.label());
                self.enter(RunPhase::Translating);
                match translator.translate_document(&doc.source, &doc.target).await {
                    Ok(done) => debug!(
                        "{}: {} chunks, {} written",
                        doc.relative.display(),
                        done.chunks,
                        format_size(done.bytes_written)
                    ),
                    Err(e) if !e.is_document_scoped() => return Err(e),
                    Err(e) => {
                        error!("Failed to translate {}: {}", doc.relative.display(), e);
                        error = Some(e.to_string());
                    }
                }
            }
            SyncDecision::Skip { .. } => {
                info!("Skipping: {} ({})", doc.relative.display(), decision.label());
            }
        }

        self.enter(RunPhase::Verifying);
        let verification = self.verify(&doc.source, &doc.target);

        Ok(FileOutcome {
            path: doc.relative.clone(),
            decision,
            error,
            verification,
        })
    }

    /// Compare the current source with whatever output exists now
    fn verify(&self, source: &Path, target: &Path) -> Option<Verification> {
        let source_text = read_for_verification(source)?;
        let target_text = read_for_verification(target)?;

        info!("Comparing markdown elements:");
        let verification = self.counter.verify(&source_text, &target_text);
        if verification.all_matched() {
            info!("All elements match.");
        } else {
            for mismatch in &verification.mismatches {
                warn!("{}", mismatch);
            }
            warn!("★★ Some elements do not match. Review required. ★★");
        }
        info!("-----");

        Some(verification)
    }
}

fn read_for_verification(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Cannot verify, {} is unreadable: {}", path.display(), e);
            None
        }
    }
}
