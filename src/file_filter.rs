//! # File Filter Module
//!
//! This module contains components for deciding which discovered files are
//! checked: files must have a licensed suffix and must not be ignored.

use std::path::Path;

use crate::ignore::IgnoreManager;
use crate::templates::get_comment_style_for_file;

/// Result of a file filtering operation.
#[derive(Debug, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter {
  /// Determines whether a file should be processed.
  ///
  /// # Parameters
  ///
  /// * `path` - The path of the file, relative to the scan root
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Filter that only accepts files with a licensed suffix.
pub struct LicensedSuffixFilter;

impl FileFilter for LicensedSuffixFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if get_comment_style_for_file(path).is_some() {
      FilterResult::process()
    } else {
      FilterResult::skip("no license header required for this file type")
    }
  }
}

/// Filter that excludes files matched by the ignore patterns.
pub struct IgnoreFilter {
  ignore_manager: IgnoreManager,
}

impl IgnoreFilter {
  pub const fn new(ignore_manager: IgnoreManager) -> Self {
    Self { ignore_manager }
  }
}

impl FileFilter for IgnoreFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if self.ignore_manager.is_ignored(path) {
      FilterResult::skip("matches ignore pattern")
    } else {
      FilterResult::process()
    }
  }
}

/// Filter that runs several filters in order and stops at the first skip.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    for filter in &self.filters {
      let result = filter.should_process(path);
      if !result.should_process {
        return result;
      }
    }
    FilterResult::process()
  }
}

/// Creates the filter used for a run: licensed suffixes minus ignored paths.
pub fn create_default_filter(ignore_manager: IgnoreManager) -> CompositeFilter {
  CompositeFilter::new(vec![Box::new(LicensedSuffixFilter), Box::new(IgnoreFilter::new(ignore_manager))])
}
