use crate::model::Region;

/// Tracks code fence and table state line by line.
///
/// A line starting with three backticks toggles the fence. A line starting
/// with `|` enters a table and the first line that doesn't leaves it. Both
/// flags are updated for every line, so a pipe-led line inside a fence also
/// counts as a table row.
#[derive(Debug, Default)]
pub(super) struct RegionTracker {
    in_fence: bool,
    in_table: bool,
}

impl RegionTracker {
    /// Update state for `line` and return the region it belongs to
    pub(super) fn observe(&mut self, line: &str) -> Option<Region> {
        if line.starts_with("```") {
            self.in_fence = !self.in_fence;
        }

        let is_row = line.starts_with('|');
        if is_row && !self.in_table {
            self.in_table = true;
        } else if !is_row && self.in_table {
            self.in_table = false;
        }

        self.current()
    }

    fn current(&self) -> Option<Region> {
        if self.in_fence {
            Some(Region::CodeFence)
        } else if self.in_table {
            Some(Region::Table)
        } else {
            None
        }
    }
}
