//! # Content Transformer Module
//!
//! This module provides utilities for transforming file content when a license
//! header is inserted, keeping interpreter lines (shebangs) at the very top of
//! the file.

use crate::templates::is_shebang_line;

/// Content transformation utilities for header insertion.
pub struct ContentTransformer;

impl ContentTransformer {
  /// Splits leading shebang lines (any line containing `!`) off the content.
  ///
  /// The returned prefix always ends with a newline when it is non-empty. A
  /// single blank line directly after the shebang run is treated as part of
  /// the separator and dropped from the remaining content.
  ///
  /// # Parameters
  ///
  /// * `content` - The file content to split
  ///
  /// # Returns
  ///
  /// A tuple containing:
  /// - The shebang lines (empty if there are none)
  /// - The content that follows them
  pub fn extract_prefix(content: &str) -> (String, &str) {
    let mut prefix_len = 0;
    for line in content.split_inclusive('\n') {
      if !is_shebang_line(line) {
        break;
      }
      prefix_len += line.len();
    }

    if prefix_len == 0 {
      return (String::new(), content);
    }

    let mut prefix = content[..prefix_len].to_string();
    if !prefix.ends_with('\n') {
      prefix.push('\n');
    }

    let mut rest = &content[prefix_len..];
    if let Some(separator) = rest.split_inclusive('\n').next() {
      if separator.trim().is_empty() {
        rest = &rest[separator.len()..];
      }
    }

    (prefix, rest)
  }

  /// Inserts a rendered header in front of the content.
  ///
  /// Files without a shebang get the header prepended verbatim. Files with one
  /// keep it on top, followed by one blank line and then the header. Existing
  /// content, including any malformed header, is kept as is.
  ///
  /// # Parameters
  ///
  /// * `content` - The current file content
  /// * `header` - The rendered header, ending with a newline
  pub fn insert_header(content: &str, header: &str) -> String {
    let (prefix, rest) = Self::extract_prefix(content);

    let mut result = String::with_capacity(prefix.len() + header.len() + rest.len() + 1);
    if !prefix.is_empty() {
      result.push_str(&prefix);
      result.push('\n');
    }
    result.push_str(header);
    result.push_str(rest);
    result
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const HEADER: &str = "#\n# Header\n";

  #[test]
  fn test_extract_prefix_none() {
    let (prefix, rest) = ContentTransformer::extract_prefix("import os\n");
    assert_eq!(prefix, "");
    assert_eq!(rest, "import os\n");
  }

  #[test]
  fn test_extract_prefix_shebang_and_blank() {
    let (prefix, rest) = ContentTransformer::extract_prefix("#!/usr/bin/env python3\n\nimport os\n");
    assert_eq!(prefix, "#!/usr/bin/env python3\n");
    assert_eq!(rest, "import os\n");
  }

  #[test]
  fn test_extract_prefix_keeps_second_blank_line() {
    let (prefix, rest) = ContentTransformer::extract_prefix("#!/bin/sh\n\n\necho hi\n");
    assert_eq!(prefix, "#!/bin/sh\n");
    assert_eq!(rest, "\necho hi\n");
  }

  #[test]
  fn test_extract_prefix_without_trailing_newline() {
    let (prefix, rest) = ContentTransformer::extract_prefix("#!/bin/sh");
    assert_eq!(prefix, "#!/bin/sh\n");
    assert_eq!(rest, "");
  }

  #[test]
  fn test_insert_header_plain() {
    let result = ContentTransformer::insert_header("print('hi')\n", HEADER);
    assert_eq!(result, "#\n# Header\nprint('hi')\n");
  }

  #[test]
  fn test_insert_header_empty_file() {
    assert_eq!(ContentTransformer::insert_header("", HEADER), HEADER);
  }

  #[test]
  fn test_insert_header_after_shebang() {
    let result = ContentTransformer::insert_header("#!/bin/sh\n\necho hi\n", HEADER);
    assert_eq!(result, "#!/bin/sh\n\n#\n# Header\necho hi\n");

    let result = ContentTransformer::insert_header("#!/bin/sh\necho hi\n", HEADER);
    assert_eq!(result, "#!/bin/sh\n\n#\n# Header\necho hi\n");
  }

  #[test]
  fn test_insert_header_after_bang_comment() {
    let result = ContentTransformer::insert_header("// Generated, do not edit!\n\nint x;\n", HEADER);
    assert_eq!(result, "// Generated, do not edit!\n\n#\n# Header\nint x;\n");
  }
}
