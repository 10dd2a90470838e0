/// Why a document is scheduled for translation
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TranslateReason {
    /// No output document exists yet
    New,
    /// Source changed after the previous run completed
    Updated { modified: i64 },
}

/// Sync planner verdict for one source document
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SyncDecision {
    Translate(TranslateReason),
    Skip { modified: i64 },
}

impl SyncDecision {
    pub fn is_translate(&self) -> bool {
        matches!(self, SyncDecision::Translate(_))
    }

    /// Short label used in progress lines
    pub fn label(&self) -> &'static str {
        match self {
            SyncDecision::Translate(TranslateReason::New) => "new file",
            SyncDecision::Translate(TranslateReason::Updated { .. }) => "updated",
            SyncDecision::Skip { .. } => "unchanged",
        }
    }
}
