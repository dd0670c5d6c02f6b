//! # File Collector Module
//!
//! This module walks the scan root and collects the files whose license
//! headers are checked.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::file_filter::FileFilter;
use crate::ignore::normalize_relative_path;
use crate::templates::{CommentStyle, get_comment_style_for_file};

/// A file selected for checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
  /// Path used for reading and writing the file
  pub path: PathBuf,
  /// Path relative to the scan root, used for display and ignore matching
  pub relative_path: PathBuf,
  /// Header style the file must carry
  pub style: CommentStyle,
}

impl CandidateFile {
  /// Builds a candidate from a path relative to `root`, or `None` if the file
  /// does not need a license header.
  pub fn from_relative(root: &Path, relative_path: PathBuf) -> Option<Self> {
    let style = get_comment_style_for_file(&relative_path)?;
    Some(Self {
      path: root.join(&relative_path),
      relative_path,
      style,
    })
  }
}

/// File collector for directory traversal.
pub struct FileCollector {
  /// Directory the scan starts from
  root: PathBuf,
}

/// Hidden entries are not descended into, the way shell `**` globbing skips
/// them.
fn is_hidden(entry: &DirEntry) -> bool {
  entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

impl FileCollector {
  /// Creates a new FileCollector rooted at `root`.
  pub const fn new(root: PathBuf) -> Self {
    Self { root }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Recursively collects files under the root that pass `filter`.
  ///
  /// Unreadable directories are logged and skipped. The result is sorted by
  /// relative path.
  pub fn collect(&self, filter: &dyn FileFilter) -> Vec<CandidateFile> {
    debug!("Scanning directory: {}", self.root.display());
    let start_time = Instant::now();

    let mut files = Vec::new();
    let walker = WalkDir::new(&self.root).into_iter().filter_entry(|e| !is_hidden(e));

    for entry in walker {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          warn!("Error reading directory entry: {}", e);
          continue;
        }
      };

      if !entry.file_type().is_file() {
        continue;
      }

      let relative_path = normalize_relative_path(entry.path(), &self.root);
      let result = filter.should_process(&relative_path);
      if !result.should_process {
        trace!(
          "Skipping: {} ({})",
          relative_path.display(),
          result.reason.as_deref().unwrap_or("filtered")
        );
        continue;
      }

      if let Some(candidate) = CandidateFile::from_relative(&self.root, relative_path) {
        files.push(candidate);
      }
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    debug!(
      "Found {} files in {}ms",
      files.len(),
      start_time.elapsed().as_millis()
    );

    files
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use anyhow::Result;
  use tempfile::tempdir;

  use super::*;
  use crate::file_filter::create_default_filter;
  use crate::ignore::IgnoreManager;

  fn touch(root: &Path, rel: &str) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(path, "")?;
    Ok(())
  }

  fn relative_paths(files: &[CandidateFile]) -> Vec<String> {
    files
      .iter()
      .map(|f| f.relative_path.to_string_lossy().replace('\\', "/"))
      .collect()
  }

  #[test]
  fn test_collects_licensed_files_recursively() -> Result<()> {
    let dir = tempdir()?;
    touch(dir.path(), "src/main.cpp")?;
    touch(dir.path(), "src/motor/driver.hpp")?;
    touch(dir.path(), "scripts/run.sh")?;
    touch(dir.path(), "README.md")?;
    touch(dir.path(), "config.hpp.in")?;

    let collector = FileCollector::new(dir.path().to_path_buf());
    let files = collector.collect(&create_default_filter(IgnoreManager::default()));

    assert_eq!(
      relative_paths(&files),
      vec!["config.hpp.in", "scripts/run.sh", "src/main.cpp", "src/motor/driver.hpp"]
    );
    assert_eq!(files[0].style, CommentStyle::Block);
    assert_eq!(files[1].style, CommentStyle::Line);
    assert_eq!(files[2].path, dir.path().join("src/main.cpp"));
    Ok(())
  }

  #[test]
  fn test_skips_hidden_entries() -> Result<()> {
    let dir = tempdir()?;
    touch(dir.path(), ".git/hooks/pre-commit.sh")?;
    touch(dir.path(), ".gitlab-ci.yml")?;
    touch(dir.path(), "src/.hidden.cpp")?;
    touch(dir.path(), "src/visible.cpp")?;

    let collector = FileCollector::new(dir.path().to_path_buf());
    let files = collector.collect(&create_default_filter(IgnoreManager::default()));

    assert_eq!(relative_paths(&files), vec!["src/visible.cpp"]);
    Ok(())
  }

  #[test]
  fn test_applies_ignore_patterns() -> Result<()> {
    let dir = tempdir()?;
    touch(dir.path(), "ext/modm/a.cpp")?;
    touch(dir.path(), "src/b.cpp")?;

    let ignore_manager = IgnoreManager::new(&["ext/**".to_string()], dir.path())?;
    let collector = FileCollector::new(dir.path().to_path_buf());
    let files = collector.collect(&create_default_filter(ignore_manager));

    assert_eq!(relative_paths(&files), vec!["src/b.cpp"]);
    Ok(())
  }

  #[test]
  fn test_empty_directory() -> Result<()> {
    let dir = tempdir()?;
    let collector = FileCollector::new(dir.path().to_path_buf());
    assert!(collector.collect(&create_default_filter(IgnoreManager::default())).is_empty());
    Ok(())
  }
}
