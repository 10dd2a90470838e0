use std::path::{Path, PathBuf};

/// Whether `path` names a markdown document (`.md` extension)
pub fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Location of `source` under `target_root`, keeping its path relative to
/// `source_root`. Returns the relative path alongside the mirrored one.
pub fn mirror_path(source_root: &Path, target_root: &Path, source: &Path) -> Option<(PathBuf, PathBuf)> {
    let relative = source.strip_prefix(source_root).ok()?;
    Some((relative.to_path_buf(), target_root.join(relative)))
}
