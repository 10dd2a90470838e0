use std::fmt;
use std::path::PathBuf;

use super::{SyncDecision, Verification};

/// What happened to a single document during a run
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Path relative to the source root
    pub path: PathBuf,
    pub decision: SyncDecision,
    /// Translation failure, if the document could not be translated
    pub error: Option<String>,
    /// Structural comparison; `None` when there was no output to compare
    pub verification: Option<Verification>,
}

impl FileOutcome {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn has_mismatches(&self) -> bool {
        self.verification.as_ref().is_some_and(|v| !v.all_matched())
    }
}

/// Aggregated outcome of one run over the source tree
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub translated_new: usize,
    pub translated_updated: usize,
    pub skipped: usize,
    pub failed: Vec<PathBuf>,
    pub mismatched: Vec<PathBuf>,
    /// Timestamp persisted at the end of the run, if RunState advanced
    pub recorded_run: Option<i64>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        use super::TranslateReason;

        if outcome.failed() {
            self.failed.push(outcome.path.clone());
        } else {
            match outcome.decision {
                SyncDecision::Translate(TranslateReason::New) => self.translated_new += 1,
                SyncDecision::Translate(TranslateReason::Updated { .. }) => {
                    self.translated_updated += 1
                }
                SyncDecision::Skip { .. } => self.skipped += 1,
            }
        }
        if outcome.has_mismatches() {
            self.mismatched.push(outcome.path.clone());
        }
    }

    pub fn translated(&self) -> usize {
        self.translated_new + self.translated_updated
    }

    pub fn documents(&self) -> usize {
        self.translated() + self.skipped + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} documents: {} translated ({} new, {} updated), {} skipped, {} failed, {} with mismatches",
            self.documents(),
            self.translated(),
            self.translated_new,
            self.translated_updated,
            self.skipped,
            self.failed.len(),
            self.mismatched.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Mismatch, TranslateReason};

    fn outcome(path: &str, decision: SyncDecision) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from(path),
            decision,
            error: None,
            verification: Some(Verification::default()),
        }
    }

    #[test]
    fn test_summary_counts_each_decision() {
        let mut summary = RunSummary::default();
        summary.record(&outcome("a.md", SyncDecision::Translate(TranslateReason::New)));
        summary.record(&outcome(
            "b.md",
            SyncDecision::Translate(TranslateReason::Updated { modified: 10 }),
        ));
        summary.record(&outcome("c.md", SyncDecision::Skip { modified: 1 }));

        assert_eq!(summary.translated(), 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.documents(), 3);
        assert!(summary.is_clean());
    }

    #[test]
    fn test_failed_documents_are_not_counted_as_translated() {
        let mut summary = RunSummary::default();
        let mut failed = outcome("a.md", SyncDecision::Translate(TranslateReason::New));
        failed.error = Some("backend down".to_string());
        failed.verification = None;
        summary.record(&failed);

        assert_eq!(summary.translated(), 0);
        assert_eq!(summary.failed, vec![PathBuf::from("a.md")]);
        assert!(!summary.is_clean());
    }

    #[test]
    fn test_mismatches_are_tracked_independently() {
        let mut summary = RunSummary::default();
        let mut skipped = outcome("a.md", SyncDecision::Skip { modified: 1 });
        skipped.verification = Some(Verification {
            mismatches: vec![Mismatch { element: Element::Hyperlink, source: 2, target: 1 }],
        });
        summary.record(&skipped);

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.mismatched, vec![PathBuf::from("a.md")]);
    }
}
