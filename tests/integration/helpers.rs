//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// The manifest every test workspace starts from. Comments and the unrelated
/// serde entry exist so tests can assert they survive a version bump.
pub const WORKSPACE_MANIFEST: &str = r#"# Lumen workspace manifest.
# cargo-skiff rewrites the two version fields below on release.
[workspace]
members = ["crates/*"]
resolver = "2"

[workspace.package]
version = "1.2.2" # bumped by cargo skiff
edition = "2021"
license = "MIT"

[workspace.dependencies]
serde = { version = "1.0", features = ["derive"] }
lumen = { path = "crates/lumen", version = "=1.2.2" }
"#;

/// A test workspace with a git history and a self-referential dependency
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  /// Create a committed workspace with one member crate named `lumen`
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;

    std::fs::write(path.join("Cargo.toml"), WORKSPACE_MANIFEST)?;

    let crate_path = path.join("crates").join("lumen");
    std::fs::create_dir_all(crate_path.join("src"))?;
    std::fs::write(
      crate_path.join("Cargo.toml"),
      r#"[package]
name = "lumen"
version = "1.2.2"
edition.workspace = true
license.workspace = true
"#,
    )?;
    std::fs::write(crate_path.join("src/lib.rs"), "pub fn hello() {}\n")?;

    git(&path, &["add", "."])?;
    git(&path, &["commit", "-m", "Initial workspace setup"])?;

    Ok(Self { _root: root, path })
  }

  /// Number of commits on the current branch
  pub fn commit_count(&self) -> Result<usize> {
    let output = git(&self.path, &["rev-list", "--count", "HEAD"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().parse()?)
  }

  /// Subject line of the latest commit
  pub fn last_commit_message(&self) -> Result<String> {
    let output = git(&self.path, &["log", "-1", "--format=%s"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Read a file relative to the workspace root
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }

  /// Write a file relative to the workspace root
  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    std::fs::write(self.path.join(path), content)?;
    Ok(())
  }
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run the cargo-skiff binary; callers assert on the exit status themselves
pub fn run_skiff(cwd: &Path, args: &[&str]) -> Result<Output> {
  let skiff_bin = env!("CARGO_BIN_EXE_cargo-skiff");

  Command::new(skiff_bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run cargo-skiff")
}
