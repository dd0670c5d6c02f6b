//! # Templates Module
//!
//! This module builds the GPL license headers that source files are expected
//! to start with, and maps file names onto the comment style used to write
//! them.
//!
//! The module includes:
//! - [`CommentStyle`] for the two header shapes (block comments and line
//!   comments) and the suffix lookup table that selects between them
//! - [`HeaderTemplate`] for the expected header lines of one style
//! - [`LicenseData`] for the values substituted into a header
//! - [`TemplateManager`] for holding one template per style
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//!
//! use header_check::templates::{CommentStyle, LicenseData, TemplateManager};
//!
//! let manager = TemplateManager::new("Taproot");
//! let template = manager.template_for_file(Path::new("src/main.cpp")).unwrap();
//! assert_eq!(template.style(), CommentStyle::Block);
//!
//! let data = LicenseData {
//!   project_owner: "UW".to_string(),
//!   year: "2021".to_string(),
//! };
//! let header = template.render(&data);
//! assert!(header.starts_with("/*\n * Copyright (c) 2021 UW\n"));
//! ```

use std::path::Path;

use serde::Serialize;

/// Substring every copyright line must contain.
pub const COPYRIGHT_MARKER: &str = "Copyright (c)";

/// Marker of an interpreter line that may precede the header.
///
/// Any leading line containing it counts, not only `#!` lines, so generated
/// files that open with `// do not edit!` or a `/*!` block are handled the
/// same way as scripts.
pub const SHEBANG_MARKER: &str = "!";

/// Whether `line` belongs to the run of lines allowed above the header.
pub fn is_shebang_line(line: &str) -> bool {
  line.contains(SHEBANG_MARKER)
}

/// The shape of a license header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
  /// `/* ... */` with ` * ` prefixed lines, used by C and C++ sources.
  Block,
  /// `#` prefixed lines, used by scripts and configuration files.
  Line,
}

/// Suffixes of files that must carry a header, with the style they use.
///
/// Compound suffixes are listed alongside the simple ones; lookup picks the
/// longest suffix that matches.
const LICENSED_SUFFIXES: &[(&str, CommentStyle)] = &[
  (".cpp", CommentStyle::Block),
  (".hpp", CommentStyle::Block),
  (".h", CommentStyle::Block),
  (".hpp.in", CommentStyle::Block),
  (".cpp.in", CommentStyle::Block),
  (".lb", CommentStyle::Line),
  (".py", CommentStyle::Line),
  (".sh", CommentStyle::Line),
  (".yml", CommentStyle::Line),
  (".py.in", CommentStyle::Line),
];

impl CommentStyle {
  /// Index of the copyright line within a header of this style.
  ///
  /// Block headers open with `/*`, so their copyright line comes second.
  pub const fn copyright_line_index(self) -> usize {
    match self {
      CommentStyle::Block => 1,
      CommentStyle::Line => 0,
    }
  }

  /// All file suffixes that use this style.
  pub fn suffixes(self) -> impl Iterator<Item = &'static str> {
    LICENSED_SUFFIXES
      .iter()
      .filter(move |(_, style)| *style == self)
      .map(|(suffix, _)| *suffix)
  }

  const fn top(self) -> Option<&'static str> {
    match self {
      CommentStyle::Block => Some("/*"),
      CommentStyle::Line => None,
    }
  }

  const fn bottom(self) -> Option<&'static str> {
    match self {
      CommentStyle::Block => Some(" */"),
      CommentStyle::Line => None,
    }
  }

  /// Prefix for an empty line inside the header.
  const fn empty_line(self) -> &'static str {
    match self {
      CommentStyle::Block => " *",
      CommentStyle::Line => "#",
    }
  }

  fn comment_line(self, text: &str) -> String {
    if text.is_empty() {
      self.empty_line().to_string()
    } else {
      format!("{} {}", self.empty_line(), text)
    }
  }
}

/// Returns the comment style for a file, or `None` if the file does not need a
/// license header.
///
/// Matching is done on the file name, so `foo.hpp.in` is a block-comment file
/// and `foo.in` is not licensed at all. A bare suffix such as `.py` (a hidden
/// file with nothing before the dot) does not count.
pub fn get_comment_style_for_file(path: &Path) -> Option<CommentStyle> {
  let file_name = path.file_name()?.to_str()?;

  LICENSED_SUFFIXES
    .iter()
    .filter(|(suffix, _)| file_name.len() > suffix.len() && file_name.ends_with(suffix))
    .max_by_key(|(suffix, _)| suffix.len())
    .map(|(_, style)| *style)
}

/// Values substituted into a header when it is written to a file.
#[derive(Debug, Clone)]
pub struct LicenseData {
  /// Owner named on the copyright line
  pub project_owner: String,
  /// Copyright year
  pub year: String,
}

/// The expected header for one comment style, with the project name filled
/// in.
///
/// The line at [`copyright_line_index`](Self::copyright_line_index) is a
/// placeholder: checks only require it to contain [`COPYRIGHT_MARKER`] and the
/// owner, and [`render`](Self::render) replaces it with a real copyright
/// notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
  style: CommentStyle,
  lines: Vec<String>,
}

impl HeaderTemplate {
  /// Builds the GPL header for `style` naming `project_name`.
  pub fn new(style: CommentStyle, project_name: &str) -> Self {
    let body = [
      String::new(),
      format!("This file is part of {project_name}."),
      String::new(),
      format!("{project_name} is free software: you can redistribute it and/or modify"),
      "it under the terms of the GNU General Public License as published by".to_string(),
      "the Free Software Foundation, either version 3 of the License, or".to_string(),
      "(at your option) any later version.".to_string(),
      String::new(),
      format!("{project_name} is distributed in the hope that it will be useful,"),
      "but WITHOUT ANY WARRANTY; without even the implied warranty of".to_string(),
      "MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the".to_string(),
      "GNU General Public License for more details.".to_string(),
      String::new(),
      "You should have received a copy of the GNU General Public License".to_string(),
      format!("along with {project_name}.  If not, see <https://www.gnu.org/licenses/>."),
    ];

    let mut lines = Vec::with_capacity(body.len() + 3);
    lines.extend(style.top().map(str::to_string));
    // Copyright placeholder
    lines.push(style.empty_line().to_string());
    lines.extend(body.iter().map(|text| style.comment_line(text)));
    lines.extend(style.bottom().map(str::to_string));

    debug_assert_eq!(lines[style.copyright_line_index()], style.empty_line());

    Self { style, lines }
  }

  pub const fn style(&self) -> CommentStyle {
    self.style
  }

  /// The expected header lines, copyright placeholder included.
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  pub const fn copyright_line_index(&self) -> usize {
    self.style.copyright_line_index()
  }

  /// Renders the header to be written into a file.
  ///
  /// The copyright placeholder becomes `Copyright (c) <year> <owner>`, so a
  /// file that receives this header passes the check afterwards. The result
  /// ends with exactly one newline.
  pub fn render(&self, data: &LicenseData) -> String {
    let copyright = self
      .style
      .comment_line(&format!("{COPYRIGHT_MARKER} {} {}", data.year, data.project_owner));

    let mut lines = self.lines.clone();
    lines[self.copyright_line_index()] = copyright;

    let mut rendered = lines.join("\n").trim_end_matches(['\r', '\n']).to_string();
    rendered.push('\n');
    rendered
  }
}

/// Holds the header template for each comment style.
#[derive(Debug, Clone)]
pub struct TemplateManager {
  block: HeaderTemplate,
  line: HeaderTemplate,
}

impl TemplateManager {
  /// Creates templates for every style naming `project_name`.
  pub fn new(project_name: &str) -> Self {
    Self {
      block: HeaderTemplate::new(CommentStyle::Block, project_name),
      line: HeaderTemplate::new(CommentStyle::Line, project_name),
    }
  }

  pub const fn template_for(&self, style: CommentStyle) -> &HeaderTemplate {
    match style {
      CommentStyle::Block => &self.block,
      CommentStyle::Line => &self.line,
    }
  }

  /// Returns the template a file must match, or `None` for unlicensed files.
  pub fn template_for_file(&self, path: &Path) -> Option<&HeaderTemplate> {
    get_comment_style_for_file(path).map(|style| self.template_for(style))
  }
}
