//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! Errors carry the path they occurred on and are propagated to the caller.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Read full file content.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to read
  ///
  /// # Returns
  ///
  /// The complete file content as a String.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Write file content.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to write
  /// * `content` - Content to write to the file
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_write_then_read() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("a.py");

    FileIO::write_file(&path, "print('hi')\n")?;
    assert_eq!(FileIO::read_full_content(&path)?, "print('hi')\n");
    Ok(())
  }

  #[test]
  fn test_read_missing_file_names_path() {
    let err = FileIO::read_full_content(Path::new("does/not/exist.cpp")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.cpp"));
  }
}
