//! # Ignore Module
//!
//! This module resolves the `--ignored` glob patterns into the set of paths
//! that are excluded from license checking.
//!
//! Patterns are expanded against the filesystem relative to the scan root,
//! the way a shell would expand them with recursive `**` support. A file is
//! ignored when it, or any directory containing it, appears in the expansion.
//!
//! The `glob` crate does not yield the files directly under a trailing `**`
//! (`ext/**` expands to the subdirectories of `ext` only), so every path is
//! also matched against the compiled patterns.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

/// `*` and `?` stop at `/`; only `**` crosses directories.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
  case_sensitive: true,
  require_literal_separator: true,
  require_literal_leading_dot: false,
};

/// Manager for the set of ignored paths.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use header_check::ignore::IgnoreManager;
///
/// # fn main() -> anyhow::Result<()> {
/// let manager = IgnoreManager::new(&["ext/**".to_string()], Path::new("."))?;
///
/// assert!(manager.is_ignored(Path::new("ext/lib/foo.cpp")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct IgnoreManager {
  /// Expanded paths, relative to the root and normalized
  ignored: HashSet<PathBuf>,
  /// Compiled patterns, matched against root-relative paths
  patterns: Vec<Pattern>,
}

impl IgnoreManager {
  /// Expands the given patterns relative to `root`.
  ///
  /// # Parameters
  ///
  /// * `patterns` - Glob patterns, relative to `root` unless absolute
  /// * `root` - Directory the patterns are relative to
  ///
  /// # Errors
  ///
  /// Returns an error if any pattern is not a valid glob.
  pub fn new(patterns: &[String], root: &Path) -> Result<Self> {
    let mut ignored = HashSet::new();
    let mut compiled = Vec::with_capacity(patterns.len());

    for pattern in patterns {
      let relative_pattern = normalize_relative_path(Path::new(pattern), root);
      compiled.push(
        Pattern::new(&relative_pattern.to_string_lossy())
          .with_context(|| format!("Invalid glob pattern: {}", pattern))?,
      );

      let full_pattern = if Path::new(pattern).is_absolute() {
        pattern.clone()
      } else {
        let escaped_root = Pattern::escape(&root.to_string_lossy());
        format!("{}/{}", escaped_root.trim_end_matches('/'), pattern)
      };

      let entries = glob::glob(&full_pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;

      let mut matched = 0usize;
      for entry in entries {
        match entry {
          Ok(path) => {
            ignored.insert(normalize_relative_path(&path, root));
            matched += 1;
          }
          Err(e) => warn!("Error expanding ignore pattern {}: {}", pattern, e),
        }
      }
      debug!("Ignore pattern {} matched {} paths", pattern, matched);
    }

    Ok(Self {
      ignored,
      patterns: compiled,
    })
  }

  /// Checks if a path, relative to the root, is ignored.
  pub fn is_ignored(&self, path: &Path) -> bool {
    if self.is_empty() {
      return false;
    }

    let normalized = normalize_relative_path(path, Path::new(""));
    normalized
      .ancestors()
      .filter(|ancestor| !ancestor.as_os_str().is_empty())
      .any(|ancestor| {
        self.ignored.contains(ancestor)
          || self
            .patterns
            .iter()
            .any(|pattern| pattern.matches_path_with(ancestor, MATCH_OPTIONS))
      })
  }

  /// Number of patterns.
  pub fn len(&self) -> usize {
    self.patterns.len()
  }

  pub fn is_empty(&self) -> bool {
    self.patterns.is_empty()
  }
}

/// Makes `path` relative to `root` and drops `.` components.
///
/// Paths outside `root` are returned with only `.` components removed.
pub fn normalize_relative_path(path: &Path, root: &Path) -> PathBuf {
  let relative = path.strip_prefix(root).unwrap_or(path);

  relative
    .components()
    .filter(|component| !matches!(component, Component::CurDir))
    .collect()
}
