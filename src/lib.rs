//! # header-check
//!
//! A tool that checks that every source file under a directory starts with the
//! project's GPL license header, and optionally inserts the header where it is
//! missing.
//!
//! ## Features
//!
//! * Block-comment headers for C/C++ sources and line-comment headers for
//!   scripts, selected by file suffix
//! * Shebang lines are allowed above the header
//! * The copyright line only has to name the project owner, so years can vary
//! * Update mode inserts the header into non-compliant files
//! * Ignore globs to exclude vendored or generated code
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use header_check::processor::{Processor, ProcessorConfig};
//! use header_check::templates::{LicenseData, TemplateManager};
//!
//! fn main() -> anyhow::Result<()> {
//!     let license_data = LicenseData {
//!         project_owner: "Advanced Robotics at the University of Washington".to_string(),
//!         year: "2025".to_string(),
//!     };
//!
//!     let processor = Processor::new(ProcessorConfig {
//!         ignore_patterns: vec!["ext/**".to_string()],
//!         ..ProcessorConfig::new(TemplateManager::new("Taproot"), license_data, PathBuf::from("."))
//!     })?;
//!
//!     let reports = processor.run()?;
//!     let missing = reports.iter().filter(|r| r.status.is_failure()).count();
//!     println!("{missing} files are missing license headers");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Walking, checking and fixing files
//! * [`templates`] - Header templates and the suffix lookup table
//! * [`license_detection`] - The header comparison itself
//! * [`ignore`] - Ignore glob expansion
//! * [`logging`] - Logging utilities for verbose output

pub mod config;
pub mod file_filter;
pub mod ignore;
pub mod license_detection;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod templates;
