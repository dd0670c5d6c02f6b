#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::Result;
use header_check::templates::{CommentStyle, HeaderTemplate, LicenseData};

pub const PROJECT: &str = "Taproot";
pub const OWNER: &str = "Advanced Robotics at the University of Washington <robomstr@uw.edu>";

/// A header as a project file would carry it, copyright line filled in.
pub fn header(style: CommentStyle) -> String {
  HeaderTemplate::new(style, PROJECT).render(&LicenseData {
    project_owner: OWNER.to_string(),
    year: "2020-2021".to_string(),
  })
}

/// Writes `content` to `rel` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) -> Result<()> {
  let path = root.join(rel);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

pub fn read_file(root: &Path, rel: &str) -> Result<String> {
  Ok(fs::read_to_string(root.join(rel))?)
}

/// Populates a small firmware-style tree: some compliant files, some not.
///
/// Non-compliant: `src/motor.cpp`, `scripts/deploy.sh`, `ext/vendor/lib.hpp`.
pub fn setup_project(root: &Path) -> Result<()> {
  write_file(
    root,
    "src/main.cpp",
    &format!("{}\n#include \"motor.hpp\"\n", header(CommentStyle::Block)),
  )?;
  write_file(root, "src/motor.cpp", "#include \"motor.hpp\"\n")?;
  write_file(
    root,
    "src/motor.hpp",
    &format!("{}\n#pragma once\n", header(CommentStyle::Block)),
  )?;
  write_file(
    root,
    "scripts/build.py",
    &format!("#!/usr/bin/python3\n\n{}\nimport sys\n", header(CommentStyle::Line)),
  )?;
  write_file(root, "scripts/deploy.sh", "#!/bin/bash\n\necho deploy\n")?;
  write_file(root, "ext/vendor/lib.hpp", "int vendored();\n")?;
  write_file(root, "README.md", "# Firmware\n")?;
  Ok(())
}
