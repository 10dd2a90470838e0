//! Structural verification of translated documents
//!
//! Counts coarse markdown constructs in the source and the translation and
//! reports every construct whose count changed. Counting sits behind the
//! [`StructureCounter`] trait so a stricter parser can replace the pattern
//! heuristics without touching the planner or the coordinator.

mod patterns;

pub use patterns::PatternCounter;

use crate::model::{ElementCounts, Verification};

/// Produces element counts for a markdown text
pub trait StructureCounter {
    fn count(&self, text: &str) -> ElementCounts;

    /// Count both texts and compare them
    fn verify(&self, source: &str, translated: &str) -> Verification {
        compare(&self.count(source), &self.count(translated))
    }
}

/// Count elements with the default pattern heuristics
pub fn count_elements(text: &str) -> ElementCounts {
    PatternCounter.count(text)
}

/// Compare source counts with translated counts
pub fn compare(source: &ElementCounts, translated: &ElementCounts) -> Verification {
    source.compare(translated)
}
