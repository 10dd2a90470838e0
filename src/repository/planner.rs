//! Translate-or-skip decisions for source documents

use std::path::Path;

use crate::model::{SyncDecision, TranslateReason};

use super::oracle::LastModified;

/// Decides per document whether it needs translating, given the time the
/// previous run completed
#[derive(Debug, Clone, Copy)]
pub struct SyncPlanner {
    last_run: i64,
}

impl SyncPlanner {
    pub fn new(last_run: i64) -> Self {
        Self { last_run }
    }

    /// Plan one document. The oracle is only consulted when an output
    /// already exists.
    pub fn plan(&self, source: &Path, target: &Path, oracle: &impl LastModified) -> SyncDecision {
        if !target.exists() {
            return SyncDecision::Translate(TranslateReason::New);
        }
        self.decide_existing(oracle.last_modified(source))
    }

    /// Decision for a document whose output exists and whose source was
    /// last modified at `modified`
    pub fn decide_existing(&self, modified: i64) -> SyncDecision {
        if modified > self.last_run {
            SyncDecision::Translate(TranslateReason::Updated { modified })
        } else {
            SyncDecision::Skip { modified }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.md");
        let target = dir.path().join("out").join("a.md");
        fs::write(&source, "# a\n").unwrap();
        (dir, source, target)
    }

    #[test]
    fn test_missing_target_always_translates() {
        let (_dir, source, target) = setup();
        let calls = Cell::new(0);
        let oracle = |_: &Path| {
            calls.set(calls.get() + 1);
            0_i64
        };

        for last_run in [0, 150, i64::MAX] {
            let decision = SyncPlanner::new(last_run).plan(&source, &target, &oracle);
            assert_eq!(decision, SyncDecision::Translate(TranslateReason::New));
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_existing_target_compares_with_last_run() {
        let (_dir, source, target) = setup();
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "# translated\n").unwrap();
        let oracle = |_: &Path| 100_i64;

        assert_eq!(
            SyncPlanner::new(150).plan(&source, &target, &oracle),
            SyncDecision::Skip { modified: 100 }
        );
        assert_eq!(
            SyncPlanner::new(50).plan(&source, &target, &oracle),
            SyncDecision::Translate(TranslateReason::Updated { modified: 100 })
        );
    }

    #[test]
    fn test_equal_timestamp_skips() {
        let planner = SyncPlanner::new(100);
        assert_eq!(planner.decide_existing(100), SyncDecision::Skip { modified: 100 });
        assert!(planner.decide_existing(101).is_translate());
    }

    #[test]
    fn test_decision_is_repeatable() {
        let planner = SyncPlanner::new(75);
        let first = planner.decide_existing(80);
        for _ in 0..3 {
            assert_eq!(planner.decide_existing(80), first);
        }
    }
}
