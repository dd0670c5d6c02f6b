//! # Output Module
//!
//! This module centralizes all user-facing output for header-check. It
//! provides consistent formatting, colors, and symbols for terminal output.
//!
//! Per-file messages keep a fixed wording (`<path> does not contain a license
//! header`, `Adding license to <path>`) so CI logs can be searched for them.
//! In quiet mode only the paths of non-compliant files are printed.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::ProcessingSummary;

/// Symbols used in output
pub mod symbols {
  /// Success/has license
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing license/failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print the initial "Checking N files..." or "Updating N files..." message.
pub fn print_start_message(file_count: usize, update: bool) {
  if is_quiet() {
    return;
  }

  let verb = if update { "Updating" } else { "Checking" };
  let files_word = if file_count == 1 { "file" } else { "files" };

  println!("{} {} {}...", verb, file_count, files_word);
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Report a file without a valid license header.
pub fn print_missing_header(path: &Path) {
  if is_quiet() {
    // Paths only, for scripting
    println!("{}", path.display());
    return;
  }

  println!(
    "{} {} does not contain a license header",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    path.display()
  );
}

/// Report a header being inserted into a file.
pub fn print_adding_header(path: &Path) {
  if is_quiet() {
    return;
  }

  println!(
    "{} Adding license to {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    path.display()
  );
}

/// Print the success message when all files have license headers.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have license headers.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X OK, Y missing, Z added"
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary) {
  if is_quiet() {
    return;
  }

  let ok_str = summary.files_compliant.if_supports_color(Stream::Stdout, |s| s.cyan());
  let missing_str = if summary.files_missing > 0 {
    summary
      .files_missing
      .if_supports_color(Stream::Stdout, |s| s.red())
      .to_string()
  } else {
    summary
      .files_missing
      .if_supports_color(Stream::Stdout, |s| s.cyan())
      .to_string()
  };
  let added_str = summary.files_added.if_supports_color(Stream::Stdout, |s| s.green());

  let mut summary_line = format!("Summary: {} OK, {} missing, {} added", ok_str, missing_str, added_str);

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}
