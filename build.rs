use std::process::Command;

fn main() {
  embed_build_info();
  set_rerun_conditions();
}

fn embed_build_info() {
  // Short commit hash shown by --version. Skipped when git is unavailable.
  if let Some(git_hash) = git_output(&["rev-parse", "--short", "HEAD"]) {
    println!("cargo:rustc-env=HEADER_CHECK_GIT_HASH={git_hash}");
  }

  if let Some(git_date) = git_output(&["log", "-1", "--format=%cs"]) {
    println!("cargo:rustc-env=HEADER_CHECK_GIT_DATE={git_date}");
  }
}

fn git_output(args: &[&str]) -> Option<String> {
  let output = Command::new("git").args(args).output().ok()?;
  if !output.status.success() {
    return None;
  }
  let text = String::from_utf8(output.stdout).unwrap_or_default().trim().to_string();
  if text.is_empty() { None } else { Some(text) }
}

fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}
