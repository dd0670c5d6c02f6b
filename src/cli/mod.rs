//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod check;

use std::sync::LazyLock;

pub use check::{CheckArgs, run_check};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use header_check::templates::CommentStyle;

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Version with the commit it was built from, when known.
static LONG_VERSION: LazyLock<String> = LazyLock::new(|| {
  let version = env!("CARGO_PKG_VERSION");
  match (option_env!("HEADER_CHECK_GIT_HASH"), option_env!("HEADER_CHECK_GIT_DATE")) {
    (Some(hash), Some(date)) => format!("{version} ({hash} {date})"),
    (Some(hash), None) => format!("{version} ({hash})"),
    _ => version.to_string(),
  }
});

const ABOUT: &str = "Checks that every source file under a directory starts with the project's GPL license header.";

/// Long help, listing the suffixes handled by each comment style.
static LONG_ABOUT: LazyLock<String> = LazyLock::new(|| {
  let suffixes = |style: CommentStyle| style.suffixes().collect::<Vec<_>>().join(", ");
  format!(
    "{ABOUT}

C/C++ sources ({}) are expected to carry a /* */ block header and scripts ({}) a # line
header. Run it from the root of the directory to check; all subdirectories are checked except
hidden ones and those passed to --ignored.",
    suffixes(CommentStyle::Block),
    suffixes(CommentStyle::Line),
  )
});

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = "header-check",
  author,
  version,
  long_version = LONG_VERSION.as_str(),
  about = ABOUT,
  long_about = LONG_ABOUT.as_str(),
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Check headers without modifying files
  header-check --project-name Taproot --project-owner \"Advanced Robotics at the University of Washington\"

  # Insert missing headers
  header-check -p Taproot -o \"Advanced Robotics\" --update

  # Skip vendored code (quote globs so the shell does not expand them)
  header-check -p Taproot -o \"Advanced Robotics\" --ignored \"ext/**\" \"build/**\"
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub check_args: CheckArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
