//! Persisted and versioned state a run depends on
//!
//! - **oracle**: last-modified timestamps from git history or the filesystem
//! - **run_state**: the timestamp of the last completed run
//! - **planner**: translate-or-skip decisions built on both

mod oracle;
mod planner;
mod run_state;

pub use oracle::{FsOracle, GitOracle, LastModified};
pub use planner::SyncPlanner;
pub use run_state::{FileRunState, RunStateStore};
