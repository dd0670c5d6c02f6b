//! # Processor Module
//!
//! This module contains the core functionality for checking license headers
//! and inserting missing ones.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`content_transformer`] - Header insertion that keeps shebang lines on top
//! - [`file_collector`] - Directory traversal and candidate selection
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules into a single pass: enumerate files, classify them by suffix,
//! check each header, optionally fix it, and report.

mod content_transformer;
mod file_collector;
mod file_io;

use std::path::PathBuf;

use anyhow::Result;
pub use content_transformer::ContentTransformer;
pub use file_collector::{CandidateFile, FileCollector};
pub use file_io::FileIO;
use tracing::{debug, info};

use crate::file_filter::create_default_filter;
use crate::ignore::IgnoreManager;
use crate::license_detection::{LicenseDetector, TemplateLicenseDetector};
use crate::output::{print_adding_header, print_missing_header};
use crate::report::{FileReport, FileStatus};
use crate::templates::{LicenseData, TemplateManager};

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub template_manager: TemplateManager,
  pub license_data: LicenseData,
  /// Directory to scan; ignore patterns are relative to it
  pub root: PathBuf,

  /// Insert headers into non-compliant files
  pub update: bool,

  pub ignore_patterns: Vec<String>,
  pub license_detector: Option<Box<dyn LicenseDetector>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and check-only
  /// defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     update: true,
  ///     ..ProcessorConfig::new(template_manager, license_data, root)
  /// }
  /// ```
  pub fn new(template_manager: TemplateManager, license_data: LicenseData, root: PathBuf) -> Self {
    Self {
      template_manager,
      license_data,
      root,
      update: false,
      ignore_patterns: vec![],
      license_detector: None,
    }
  }
}

/// Processor for checking and inserting license headers.
///
/// The `Processor` is responsible for:
/// - Walking the root directory for files that need a header
/// - Excluding ignored paths
/// - Checking each file's header against its template
/// - Inserting headers when update mode is on
/// - Collecting a report entry per file
pub struct Processor {
  template_manager: TemplateManager,
  license_data: LicenseData,
  update: bool,
  ignore_manager: IgnoreManager,
  license_detector: Box<dyn LicenseDetector>,
  file_collector: FileCollector,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if any of the ignore patterns are invalid.
  pub fn new(config: ProcessorConfig) -> Result<Self> {
    let ignore_manager = IgnoreManager::new(&config.ignore_patterns, &config.root)?;
    debug!("Using {} ignore patterns", ignore_manager.len());

    let license_detector = config
      .license_detector
      .unwrap_or_else(|| Box::new(TemplateLicenseDetector::new(config.license_data.project_owner.clone())));

    Ok(Self {
      template_manager: config.template_manager,
      license_data: config.license_data,
      update: config.update,
      ignore_manager,
      license_detector,
      file_collector: FileCollector::new(config.root),
    })
  }

  /// Collects the files to check, sorted by path.
  pub fn collect_files(&self) -> Vec<CandidateFile> {
    let filter = create_default_filter(self.ignore_manager.clone());
    self.file_collector.collect(&filter)
  }

  /// Checks every file under the root.
  ///
  /// # Returns
  ///
  /// One report per checked file, in path order.
  pub fn run(&self) -> Result<Vec<FileReport>> {
    let files = self.collect_files();
    self.process_files(&files)
  }

  /// Checks the given files one after another.
  ///
  /// # Errors
  ///
  /// The first read or write error aborts the run.
  pub fn process_files(&self, files: &[CandidateFile]) -> Result<Vec<FileReport>> {
    files.iter().map(|file| self.process_file(file)).collect()
  }

  /// Checks a single file and, in update mode, inserts the missing header.
  pub fn process_file(&self, file: &CandidateFile) -> Result<FileReport> {
    debug!("Checking file: {}", file.relative_path.display());

    let template = self.template_manager.template_for(file.style);
    let content = FileIO::read_full_content(&file.path)?;

    let status = if self.license_detector.has_license(&content, template) {
      FileStatus::Compliant
    } else {
      print_missing_header(&file.relative_path);

      if self.update {
        print_adding_header(&file.relative_path);
        let header = template.render(&self.license_data);
        let new_content = ContentTransformer::insert_header(&content, &header);
        FileIO::write_file(&file.path, &new_content)?;
        info!("Inserted license header into {}", file.relative_path.display());
        FileStatus::Added
      } else {
        FileStatus::Missing
      }
    };

    Ok(FileReport {
      path: file.relative_path.clone(),
      style: file.style,
      status,
    })
  }

  pub const fn is_update_mode(&self) -> bool {
    self.update
  }

  pub fn root(&self) -> &std::path::Path {
    self.file_collector.root()
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;
  use crate::templates::{CommentStyle, HeaderTemplate};

  const OWNER: &str = "Advanced Robotics at the University of Washington";

  fn license_data() -> LicenseData {
    LicenseData {
      project_owner: OWNER.to_string(),
      year: "2021".to_string(),
    }
  }

  fn processor(root: &std::path::Path, update: bool, ignored: Vec<String>) -> Result<Processor> {
    Processor::new(ProcessorConfig {
      update,
      ignore_patterns: ignored,
      ..ProcessorConfig::new(TemplateManager::new("Taproot"), license_data(), root.to_path_buf())
    })
  }

  fn licensed(style: CommentStyle, body: &str) -> String {
    HeaderTemplate::new(style, "Taproot").render(&license_data()) + body
  }

  #[test]
  fn test_check_reports_each_file() -> Result<()> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("src"))?;
    fs::write(dir.path().join("src/good.cpp"), licensed(CommentStyle::Block, "\nint x;\n"))?;
    fs::write(dir.path().join("src/bad.cpp"), "int y;\n")?;
    fs::write(dir.path().join("notes.txt"), "no header needed\n")?;

    let reports = processor(dir.path(), false, vec![])?.run()?;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].path, PathBuf::from("src/bad.cpp"));
    assert_eq!(reports[0].status, FileStatus::Missing);
    assert_eq!(reports[1].path, PathBuf::from("src/good.cpp"));
    assert_eq!(reports[1].status, FileStatus::Compliant);

    assert_eq!(fs::read_to_string(dir.path().join("src/bad.cpp"))?, "int y;\n");
    Ok(())
  }

  #[test]
  fn test_update_inserts_header() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("tool.py"), "import sys\n")?;

    let reports = processor(dir.path(), true, vec![])?.run()?;
    assert_eq!(reports[0].status, FileStatus::Added);

    let content = fs::read_to_string(dir.path().join("tool.py"))?;
    assert!(content.starts_with(&format!("# Copyright (c) 2021 {OWNER}\n#\n# This file is part of Taproot.\n")));
    assert!(content.ends_with("<https://www.gnu.org/licenses/>.\nimport sys\n"));

    let reports = processor(dir.path(), true, vec![])?.run()?;
    assert_eq!(reports[0].status, FileStatus::Compliant);
    Ok(())
  }

  #[test]
  fn test_update_keeps_shebang_on_top() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("run.sh"), "#!/bin/bash\n\necho hi\n")?;

    processor(dir.path(), true, vec![])?.run()?;

    let content = fs::read_to_string(dir.path().join("run.sh"))?;
    assert!(content.starts_with("#!/bin/bash\n\n# Copyright (c) 2021"));
    assert!(content.ends_with("licenses/>.\necho hi\n"));

    let reports = processor(dir.path(), false, vec![])?.run()?;
    assert_eq!(reports[0].status, FileStatus::Compliant);
    Ok(())
  }

  #[test]
  fn test_update_does_not_repair_corrupted_header() -> Result<()> {
    let dir = tempdir()?;
    let corrupted = licensed(CommentStyle::Block, "").replace("part of Taproot", "part of Tapr00t");
    fs::write(dir.path().join("a.hpp"), &corrupted)?;

    let reports = processor(dir.path(), true, vec![])?.run()?;
    assert_eq!(reports[0].status, FileStatus::Added);

    // The old header stays below the inserted one.
    let content = fs::read_to_string(dir.path().join("a.hpp"))?;
    assert!(content.ends_with(&corrupted));

    let reports = processor(dir.path(), false, vec![])?.run()?;
    assert_eq!(reports[0].status, FileStatus::Compliant);
    Ok(())
  }

  #[test]
  fn test_ignored_files_are_skipped() -> Result<()> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("ext"))?;
    fs::write(dir.path().join("ext/vendor.cpp"), "int z;\n")?;
    fs::write(dir.path().join("main.cpp"), "int main() {}\n")?;

    let reports = processor(dir.path(), true, vec!["ext/**".to_string()])?.run()?;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].path, PathBuf::from("main.cpp"));
    assert_eq!(fs::read_to_string(dir.path().join("ext/vendor.cpp"))?, "int z;\n");
    Ok(())
  }

  #[test]
  fn test_unreadable_file_aborts() -> Result<()> {
    let dir = tempdir()?;
    let checker = processor(dir.path(), false, vec![])?;
    let missing = CandidateFile::from_relative(dir.path(), PathBuf::from("gone.cpp"))
      .ok_or_else(|| anyhow::anyhow!("gone.cpp should be licensed"))?;

    assert!(checker.process_files(&[missing]).is_err());
    Ok(())
  }

  #[test]
  fn test_invalid_ignore_pattern() {
    let dir = tempdir().unwrap();
    assert!(processor(dir.path(), false, vec!["[".to_string()]).is_err());
  }
}
