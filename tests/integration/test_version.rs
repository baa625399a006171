//! Integration tests for `cargo skiff version`

use crate::helpers::{TestWorkspace, WORKSPACE_MANIFEST, run_skiff};
use anyhow::Result;

#[test]
fn test_version_updates_both_fields() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_skiff(&ws.path, &["skiff", "version", "2.0.0"])?;
  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

  let manifest = ws.read_file("Cargo.toml")?;
  assert!(manifest.contains(r#"version = "2.0.0""#));
  assert!(manifest.contains(r#"version = "=2.0.0""#));
  Ok(())
}

#[test]
fn test_version_preserves_unrelated_content_byte_for_byte() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_skiff(&ws.path, &["skiff", "version", "2.0.0"])?;
  assert!(output.status.success());

  // The bump only changes the version digits; every other byte survives,
  // including comments and the unrelated serde entry
  let manifest = ws.read_file("Cargo.toml")?;
  assert_eq!(manifest, WORKSPACE_MANIFEST.replace("1.2.2", "2.0.0"));
  Ok(())
}

#[test]
fn test_version_strips_v_prefix() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_skiff(&ws.path, &["skiff", "version", "v2.0.1"])?;
  assert!(output.status.success());

  let manifest = ws.read_file("Cargo.toml")?;
  assert!(manifest.contains(r#"version = "2.0.1""#));
  assert!(manifest.contains(r#"version = "=2.0.1""#));
  assert!(!manifest.contains("v2.0.1"), "stored values never carry the prefix");
  Ok(())
}

#[test]
fn test_version_rejects_invalid_input() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_skiff(&ws.path, &["skiff", "version", "not-a-version"])?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1), "user error exit code");

  // Manifest untouched
  assert_eq!(ws.read_file("Cargo.toml")?, WORKSPACE_MANIFEST);
  Ok(())
}

#[test]
fn test_version_honors_explicit_crate_flag() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_skiff(&ws.path, &["skiff", "version", "3.1.4", "--crate", "lumen"])?;
  assert!(output.status.success());

  let manifest = ws.read_file("Cargo.toml")?;
  assert!(manifest.contains(r#"lumen = { path = "crates/lumen", version = "=3.1.4" }"#));
  Ok(())
}

#[test]
fn test_version_errors_when_named_crate_is_missing() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_skiff(&ws.path, &["skiff", "version", "3.1.4", "--crate", "nonexistent"])?;
  assert!(!output.status.success());

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("nonexistent"), "stderr: {}", stderr);
  Ok(())
}
