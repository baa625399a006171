//! Integration tests for `cargo skiff summary`

use crate::helpers::{TestWorkspace, run_skiff};
use anyhow::Result;

#[test]
fn test_summary_reports_artifact_size() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("lumen.wasm", &"\0".repeat(1000))?;

  let output = run_skiff(&ws.path, &["skiff", "summary"])?;
  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert_eq!(stdout, "`lumen.wasm` is 1000 bytes.\n");
  Ok(())
}

#[test]
fn test_summary_fails_without_artifact() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_skiff(&ws.path, &["skiff", "summary"])?;
  assert!(!output.status.success());

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("cargo skiff wasm"), "should point at the build command: {}", stderr);
  Ok(())
}
