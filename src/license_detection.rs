//! # License Detection Module
//!
//! This module contains the interfaces and implementations for deciding whether
//! a file already starts with a valid license header. It allows for replacing
//! the detection algorithm without modifying the processor.

use crate::templates::{COPYRIGHT_MARKER, HeaderTemplate, is_shebang_line};

/// Trait for license detectors.
///
/// Implementations decide whether file content begins with the header
/// described by a [`HeaderTemplate`].
pub trait LicenseDetector {
  /// Checks if the content starts with a valid license header.
  ///
  /// # Parameters
  ///
  /// * `content` - The full file content
  /// * `template` - The header the file is expected to carry
  ///
  /// # Returns
  ///
  /// `true` if the header is present and valid, `false` otherwise. Content
  /// shorter than the header is never an error, only non-compliant.
  fn has_license(&self, content: &str, template: &HeaderTemplate) -> bool;
}

/// Line-by-line comparison against the expected header.
///
/// Leading lines containing a `!` (shebangs and the like) are skipped,
/// together with exactly one line after them. Every header line other than the copyright line must then match the
/// template exactly. The copyright line is free-form but must contain
/// [`COPYRIGHT_MARKER`] and the project owner.
pub struct TemplateLicenseDetector {
  project_owner: String,
}

impl TemplateLicenseDetector {
  /// Creates a detector that requires `project_owner` on the copyright line.
  pub fn new(project_owner: impl Into<String>) -> Self {
    Self {
      project_owner: project_owner.into(),
    }
  }
}

/// Number of lines to skip before the header starts.
fn header_offset(lines: &[&str]) -> usize {
  let shebangs = lines.iter().take_while(|line| is_shebang_line(line)).count();

  // One separator line follows the interpreter lines, whatever it holds.
  if shebangs > 0 { shebangs + 1 } else { 0 }
}

impl LicenseDetector for TemplateLicenseDetector {
  fn has_license(&self, content: &str, template: &HeaderTemplate) -> bool {
    let lines: Vec<&str> = content.lines().collect();
    let expected = template.lines();
    let copyright_index = template.copyright_line_index();

    let offset = header_offset(&lines);
    let Some(actual) = lines.get(offset..offset + expected.len()) else {
      return false;
    };

    let before_matches = actual[..copyright_index]
      .iter()
      .zip(&expected[..copyright_index])
      .all(|(a, e)| *a == e.as_str());
    if !before_matches {
      return false;
    }

    let after_matches = actual[copyright_index + 1..]
      .iter()
      .zip(&expected[copyright_index + 1..])
      .all(|(a, e)| *a == e.as_str());
    if !after_matches {
      return false;
    }

    let copyright = actual[copyright_index];
    copyright.contains(COPYRIGHT_MARKER) && copyright.contains(self.project_owner.as_str())
  }
}
