//! # Report Module
//!
//! This module records the outcome of checking each file and can write a JSON
//! report of a run for CI consumption.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::templates::CommentStyle;

/// Outcome of checking one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
  /// The file starts with a valid header
  Compliant,
  /// The file has no valid header and was left untouched
  Missing,
  /// The file had no valid header and one was inserted
  Added,
}

impl FileStatus {
  /// Whether this outcome fails the check. Files fixed during the run still
  /// count as failures.
  pub const fn is_failure(self) -> bool {
    !matches!(self, FileStatus::Compliant)
  }
}

/// Information about a checked file for reporting
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
  /// Path relative to the scan root
  #[serde(serialize_with = "serialize_path")]
  pub path: PathBuf,
  /// Header style the file was checked against
  pub style: CommentStyle,
  pub status: FileStatus,
}

fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_str(&path.to_string_lossy())
}

/// Summary of a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingSummary {
  /// Total number of files checked
  pub total_files: usize,
  /// Files that already had a valid header
  pub files_compliant: usize,
  /// Files reported without a valid header
  pub files_missing: usize,
  /// Files that had a header inserted
  pub files_added: usize,
  /// Time spent checking, in seconds
  #[serde(rename = "processing_time_secs", serialize_with = "serialize_duration")]
  pub processing_time: Duration,
}

fn serialize_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_f64(duration.as_secs_f64())
}

impl ProcessingSummary {
  /// Creates a summary from file reports.
  pub fn from_reports(reports: &[FileReport], processing_time: Duration) -> Self {
    let mut summary = Self {
      total_files: reports.len(),
      processing_time,
      ..Self::default()
    };

    for report in reports {
      match report.status {
        FileStatus::Compliant => summary.files_compliant += 1,
        FileStatus::Missing => summary.files_missing += 1,
        FileStatus::Added => summary.files_added += 1,
      }
    }

    summary
  }

  /// Whether any file failed the check.
  pub const fn has_failures(&self) -> bool {
    self.files_missing + self.files_added > 0
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  generated_at: String,
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Writes a JSON report of a run to `output_path`.
pub fn write_json_report(output_path: &Path, reports: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
  let report = JsonReport {
    generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    summary,
    files: reports,
  };

  let json = serde_json::to_string_pretty(&report).with_context(|| "Failed to serialize JSON report")?;

  fs::write(output_path, json)
    .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))
}
