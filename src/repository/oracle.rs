//! Last-modified lookups for source documents
//!
//! Git history is preferred; anything git cannot answer falls back to file
//! metadata. Lookups never fail, an unreadable file reports timestamp 0.

use git2::{Commit, Oid, Repository, Sort};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::debug;

/// Returns the last-modified time of a path in seconds since the epoch
pub trait LastModified {
    fn last_modified(&self, path: &Path) -> i64;
}

impl<F: Fn(&Path) -> i64> LastModified for F {
    fn last_modified(&self, path: &Path) -> i64 {
        self(path)
    }
}

/// Filesystem modification time
#[derive(Debug, Default, Clone, Copy)]
pub struct FsOracle;

impl LastModified for FsOracle {
    fn last_modified(&self, path: &Path) -> i64 {
        fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or_else(|| {
                debug!("No modification time for {}", path.display());
                0
            })
    }
}

/// Author time of the latest commit that changed a file, like
/// `git log -1 --format=%at -- <path>`
pub struct GitOracle {
    repo: Option<Repository>,
    workdir: Option<PathBuf>,
}

impl GitOracle {
    /// Find the repository containing `root`. Outside a repository every
    /// lookup uses file metadata.
    pub fn discover(root: &Path) -> Self {
        match Repository::discover(root) {
            Ok(repo) => {
                let workdir = repo.workdir().and_then(|w| w.canonicalize().ok());
                debug!("Using git history from {:?}", workdir);
                Self {
                    repo: Some(repo),
                    workdir,
                }
            }
            Err(e) => {
                debug!("No git repository for {}: {}", root.display(), e.message());
                Self {
                    repo: None,
                    workdir: None,
                }
            }
        }
    }

    /// Timestamp from history, if the file appears in any commit
    pub fn commit_time(&self, path: &Path) -> Option<i64> {
        let repo = self.repo.as_ref()?;
        let relative = self.relative_path(path)?;
        last_change(repo, &relative)
    }

    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        let workdir = self.workdir.as_ref()?;
        let absolute = path.canonicalize().ok()?;
        absolute.strip_prefix(workdir).ok().map(Path::to_path_buf)
    }
}

impl LastModified for GitOracle {
    fn last_modified(&self, path: &Path) -> i64 {
        self.commit_time(path)
            .unwrap_or_else(|| FsOracle.last_modified(path))
    }
}

/// Walk history newest first and return the first commit that changed
/// `relative` relative to its parents
fn last_change(repo: &Repository, relative: &Path) -> Option<i64> {
    let mut walk = repo.revwalk().ok()?;
    walk.push_head().ok()?;
    walk.set_sorting(Sort::TIME).ok()?;

    for oid in walk.flatten() {
        let Ok(commit) = repo.find_commit(oid) else {
            continue;
        };
        let Some(blob) = blob_at(&commit, relative) else {
            continue;
        };

        // A commit touches the file unless some parent already had the same
        // blob there; merges that kept one side's version are skipped.
        let unchanged = commit
            .parents()
            .any(|parent| blob_at(&parent, relative) == Some(blob));
        if !unchanged {
            return Some(commit.author().when().seconds());
        }
    }
    None
}

fn blob_at(commit: &Commit<'_>, relative: &Path) -> Option<Oid> {
    commit.tree().ok()?.get_path(relative).ok().map(|e| e.id())
}
