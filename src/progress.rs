//! Per-document chunk progress
//!
//! The translation loop reports through [`ProgressReporter`]; indicatif only
//! appears in [`BarProgress`], so tests and `--quiet` runs use
//! [`NoopProgress`] instead. Bars live in a shared [`MultiProgress`] that the
//! console log writer suspends around each line.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Progress of the chunks of one document
pub trait ChunkProgress {
    /// Chunk `index` (zero-based) of `total` is being sent to the backend
    fn chunk_started(&self, index: usize, total: usize);
    fn chunk_done(&self);
    fn finish(&self);
}

/// Creates a [`ChunkProgress`] for each translated document
pub trait ProgressReporter {
    fn document(&self, name: &str, chunks: usize) -> Box<dyn ChunkProgress>;
}

/// Indicatif bar on stderr; documents that fit in a single chunk get none
pub struct BarProgress {
    bars: MultiProgress,
}

impl BarProgress {
    pub fn new(bars: MultiProgress) -> Self {
        Self { bars }
    }
}

impl ProgressReporter for BarProgress {
    fn document(&self, name: &str, chunks: usize) -> Box<dyn ChunkProgress> {
        if chunks < 2 {
            return Box::new(ChunkBar(ProgressBar::hidden()));
        }

        let pb = self.bars.add(ProgressBar::new(chunks as u64));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix}: [{bar:40.cyan/blue}] {pos}/{len} chunks {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_prefix(name.to_string());
        Box::new(ChunkBar(pb))
    }
}

struct ChunkBar(ProgressBar);

impl ChunkProgress for ChunkBar {
    fn chunk_started(&self, index: usize, total: usize) {
        self.0.set_message(format!("({}/{} in flight)", index + 1, total));
    }

    fn chunk_done(&self) {
        self.0.inc(1);
    }

    fn finish(&self) {
        self.0.finish_and_clear();
    }
}

pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn document(&self, _name: &str, _chunks: usize) -> Box<dyn ChunkProgress> {
        Box::new(NoopProgress)
    }
}

impl ChunkProgress for NoopProgress {
    fn chunk_started(&self, _index: usize, _total: usize) {}
    fn chunk_done(&self) {}
    fn finish(&self) {}
}
