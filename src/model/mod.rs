mod chunk;
mod elements;
mod language;
mod outcome;
mod sync;

pub use chunk::{Chunk, Region};
pub use elements::{Element, ElementCounts, Mismatch, Verification};
pub use language::LanguagePair;
pub use outcome::{FileOutcome, RunSummary};
pub use sync::{SyncDecision, TranslateReason};
