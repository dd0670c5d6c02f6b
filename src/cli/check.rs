//! # Check Command
//!
//! This module implements the check/update command for license headers.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Result, bail};
use chrono::Datelike;
use clap::Args;
use tracing::debug;

use header_check::config::{Config, load_config};
use header_check::{info_log, verbose_log};
use header_check::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use header_check::output::{print_all_files_ok, print_blank_line, print_hint, print_start_message, print_summary};
use header_check::processor::{Processor, ProcessorConfig};
use header_check::report::{ProcessingSummary, write_json_report};
use header_check::templates::{LicenseData, TemplateManager};

/// Exit code for missing or invalid arguments, matching clap's own.
const USAGE_EXIT_CODE: i32 = 2;

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Name of the project listed in all license headers
  #[arg(long, short = 'p', value_name = "NAME")]
  pub project_name: Option<String>,

  /// Name of the project owner, required on every copyright line
  #[arg(long, short = 'o', value_name = "OWNER")]
  pub project_owner: Option<String>,

  /// Insert the license header into files that lack a valid one
  #[arg(long, short = 'u')]
  pub update: bool,

  /// Files/directories to ignore, in glob format relative to the root (quote
  /// globs to keep the shell from expanding them)
  #[arg(long, short = 'i', value_name = "GLOB", num_args = 0..)]
  pub ignored: Vec<String>,

  /// Directory to check recursively
  #[arg(long, value_name = "DIR", default_value = ".")]
  pub root: PathBuf,

  /// Copyright year written into inserted headers (default: current year)
  #[arg(long)]
  pub year: Option<String>,

  /// Path to config file (default: .header-check.toml in the root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except the paths of non-compliant files
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Project settings after merging the command line with the config file.
#[derive(Debug, PartialEq, Eq)]
struct ResolvedSettings {
  project_name: String,
  project_owner: String,
  ignored: Vec<String>,
}

impl CheckArgs {
  /// Merges the arguments with the config file. Command-line values win;
  /// ignore lists are combined.
  fn resolve(&self, config: Option<Config>) -> Result<ResolvedSettings, String> {
    let config = config.unwrap_or_default();

    let project_name = self
      .project_name
      .clone()
      .or(config.project_name)
      .ok_or_else(|| "Missing required argument: --project-name <NAME>".to_string())?;
    let project_owner = self
      .project_owner
      .clone()
      .or(config.project_owner)
      .ok_or_else(|| "Missing required argument: --project-owner <OWNER>".to_string())?;

    let mut ignored = config.ignored;
    ignored.extend(self.ignored.iter().cloned());

    Ok(ResolvedSettings {
      project_name,
      project_owner,
      ignored,
    })
  }
}

/// Run the check command with the given arguments.
///
/// Exits the process with status 1 when any file lacks a valid header, even
/// if the header was inserted during this run.
pub fn run_check(args: CheckArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  if !args.root.is_dir() {
    bail!("Root directory does not exist: {}", args.root.display());
  }

  let config = load_config(args.config.as_deref(), &args.root, args.no_config)?;
  if config.is_some() {
    debug!("Using configuration file");
  }

  let settings = match args.resolve(config) {
    Ok(settings) => settings,
    Err(e) => {
      eprintln!("ERROR: {e}");
      process::exit(USAGE_EXIT_CODE);
    }
  };

  let year = args.year.unwrap_or_else(|| chrono::Local::now().year().to_string());
  let license_data = LicenseData {
    project_owner: settings.project_owner,
    year,
  };

  let processor = Processor::new(ProcessorConfig {
    update: args.update,
    ignore_patterns: settings.ignored,
    ..ProcessorConfig::new(TemplateManager::new(&settings.project_name), license_data, args.root)
  })?;

  verbose_log!("Scanning {}", processor.root().display());
  let files = processor.collect_files();
  print_start_message(files.len(), processor.is_update_mode());

  let start_time = Instant::now();
  let reports = processor.process_files(&files)?;
  let summary = ProcessingSummary::from_reports(&reports, start_time.elapsed());

  print_blank_line();
  if !summary.has_failures() {
    print_all_files_ok();
  }
  print_summary(&summary);

  if summary.files_missing > 0 {
    print_blank_line();
    print_hint("Run with --update to add missing headers.");
  }

  if let Some(ref output_path) = args.report_json {
    write_json_report(output_path, &reports, &summary)?;
    info_log!("Generated JSON report at {}", output_path.display());
  }

  if summary.has_failures() {
    process::exit(1);
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolve_from_args() {
    let args = CheckArgs {
      project_name: Some("Taproot".to_string()),
      project_owner: Some("UW".to_string()),
      ignored: vec!["ext/**".to_string()],
      ..CheckArgs::default()
    };

    let settings = args.resolve(None).unwrap();
    assert_eq!(
      settings,
      ResolvedSettings {
        project_name: "Taproot".to_string(),
        project_owner: "UW".to_string(),
        ignored: vec!["ext/**".to_string()],
      }
    );
  }

  #[test]
  fn test_resolve_args_override_config() {
    let args = CheckArgs {
      project_owner: Some("UW".to_string()),
      ignored: vec!["build/**".to_string()],
      ..CheckArgs::default()
    };
    let config = Config {
      project_name: Some("aruw-edu".to_string()),
      project_owner: Some("Someone Else".to_string()),
      ignored: vec!["ext/**".to_string()],
    };

    let settings = args.resolve(Some(config)).unwrap();
    assert_eq!(settings.project_name, "aruw-edu");
    assert_eq!(settings.project_owner, "UW");
    assert_eq!(settings.ignored, vec!["ext/**", "build/**"]);
  }

  #[test]
  fn test_resolve_missing_values() {
    let args = CheckArgs {
      project_name: Some("Taproot".to_string()),
      ..CheckArgs::default()
    };
    let err = args.resolve(None).unwrap_err();
    assert!(err.contains("--project-owner"));

    let err = CheckArgs::default().resolve(None).unwrap_err();
    assert!(err.contains("--project-name"));
  }
}
