//! Integration tests for `cargo skiff release`
//!
//! These run the real binary against throwaway git repositories. No remote
//! is ever configured, so the pipeline can never get past `git push`; the
//! tests observe ordering through what did and did not happen locally.

use crate::helpers::{TestWorkspace, run_skiff};
use anyhow::Result;

#[test]
fn test_release_aborts_on_dirty_tree() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let commits_before = ws.commit_count()?;

  // A tracked change unrelated to the version bump
  ws.write_file("crates/lumen/src/lib.rs", "pub fn hello_again() {}\n")?;

  let output = run_skiff(&ws.path, &["skiff", "release", "v1.2.3", "--no-verify"])?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(3), "validation exit code");

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("uncommitted changes"), "stderr: {}", stderr);

  // The manifest edit happens before the check and stays in place
  let manifest = ws.read_file("Cargo.toml")?;
  assert!(manifest.contains(r#"version = "1.2.3""#));
  assert!(manifest.contains(r#"version = "=1.2.3""#));

  // But nothing was committed
  assert_eq!(ws.commit_count()?, commits_before);
  Ok(())
}

#[test]
fn test_release_aborts_on_untracked_file() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("notes.md", "scratch\n")?;

  let output = run_skiff(&ws.path, &["skiff", "release", "1.2.3", "--no-verify"])?;
  assert!(!output.status.success());
  assert_eq!(ws.commit_count()?, 1);
  Ok(())
}

#[test]
fn test_release_commits_before_pushing() -> Result<()> {
  let ws = TestWorkspace::new()?;

  // Clean tree, but no remote: the pipeline must commit, then die at push
  let output = run_skiff(&ws.path, &["skiff", "release", "v1.2.3", "--no-verify"])?;
  assert!(!output.status.success(), "push has no destination and must fail");

  assert_eq!(ws.commit_count()?, 2);
  assert_eq!(ws.last_commit_message()?, "Release v1.2.3");

  // The release commit swept the manifest edit: tree is clean again
  let status = crate::helpers::git(&ws.path, &["status", "--porcelain"])?;
  assert!(status.stdout.is_empty());
  Ok(())
}

#[test]
fn test_release_rejects_invalid_version_without_side_effects() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_skiff(&ws.path, &["skiff", "release", "1.2", "--no-verify"])?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));
  assert_eq!(ws.commit_count()?, 1);
  Ok(())
}
