// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use git2::{Repository, Signature, Time};
use mdsync::config::Config;
use mdsync::error::{Result, SyncError};
use mdsync::model::LanguagePair;
use mdsync::translator::{BackendConfig, Translator};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary git repository
pub fn create_test_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = Repository::init(&repo_path).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    (dir, repo_path, repo)
}

/// Write files and commit them with the given author time
pub fn commit_at(repo: &Repository, files: &[(&str, &str)], timestamp: i64) -> git2::Oid {
    let sig = Signature::new("Test User", "test@example.com", &Time::new(timestamp, 0)).unwrap();
    let mut index = repo.index().unwrap();

    for (path, content) in files {
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }

    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, "update docs", &tree, &parents)
        .unwrap()
}

/// Write a set of files below `root`, creating directories as needed
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Source, target and state locations inside one temp dir
pub struct Workspace {
    pub dir: TempDir,
    pub source: PathBuf,
    pub target: PathBuf,
    pub state_file: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("docs");
        let target = dir.path().join("docs_ja");
        let state_file = dir.path().join("state").join("exec_date.txt");
        fs::create_dir_all(&source).unwrap();
        Self { dir, source, target, state_file }
    }

    pub fn config(&self, chunk_limit: usize) -> Config {
        Config {
            source_root: self.source.clone(),
            target_root: self.target.clone(),
            state_file: self.state_file.clone(),
            log_file: self.dir.path().join("translator.log"),
            languages: LanguagePair::new("English", "Japanese"),
            chunk_limit,
            backend: BackendConfig {
                api_key: "test-key".to_string(),
                base_url: "http://127.0.0.1:9".to_string(),
                model: "gpt-4o".to_string(),
                max_tokens: 4096,
            },
            verbose: false,
        }
    }

    pub fn target_text(&self, relative: &str) -> String {
        fs::read_to_string(self.target.join(relative)).unwrap()
    }
}

/// Scripted translator: returns each chunk unchanged apart from its
/// trailing newline. Chunks containing a poison marker fail, and `mangle`
/// breaks every link the way a careless translation would.
#[derive(Default)]
pub struct FakeTranslator {
    pub calls: RefCell<Vec<String>>,
    pub poison: Vec<String>,
    pub mangle: bool,
}

impl FakeTranslator {
    pub fn failing_on(marker: &str) -> Self {
        Self {
            poison: vec![marker.to_string()],
            ..Default::default()
        }
    }

    pub fn mangling() -> Self {
        Self {
            mangle: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, _languages: &LanguagePair) -> Result<String> {
        self.calls.borrow_mut().push(text.to_string());
        if self.poison.iter().any(|p| text.contains(p.as_str())) {
            return Err(SyncError::backend("simulated outage"));
        }
        let out = text.trim_end_matches('\n');
        if self.mangle {
            Ok(out.replace("](", "] ("))
        } else {
            Ok(out.to_string())
        }
    }
}
