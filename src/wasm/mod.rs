//! Size-optimized wasm artifact builds
//!
//! Builds the workspace's `<crate>-wasm` package with the `tiny` profile:
//! std rebuilt for size, panics compiled to immediate aborts so no unwinding
//! machinery lands in the module. The produced artifact is copied from
//! cargo's target directory to `<crate>.wasm` at the workspace root, which is
//! the canonical path the report and summary commands read.

pub mod report;

use crate::core::context::WorkspaceContext;
use crate::core::error::{BuildError, SkiffError, SkiffResult};
use std::fs;
use std::path::PathBuf;

pub const TARGET: &str = "wasm32-unknown-unknown";
pub const PROFILE: &str = "tiny";

/// Compiler flags for the non-unwinding, size-optimized build.
/// Set on top of the inherited environment; nothing else is overridden.
const RUSTFLAGS: &str = "-Zunstable-options -Cpanic=immediate-abort";

/// Canonical artifact filename for a crate
pub fn artifact_name(crate_name: &str) -> String {
  format!("{}.wasm", crate_name)
}

/// Build the wasm package and copy the module to the canonical path
///
/// Re-running without source changes reproduces an equivalent artifact; any
/// toolchain nondeterminism is passed through untouched. The previous
/// artifact at the canonical path is overwritten.
pub fn build_artifact(ctx: &WorkspaceContext, crate_name: &str) -> SkiffResult<PathBuf> {
  let package = format!("{}-wasm", crate_name);
  println!("🔨 Building {} ({} profile, {})...", package, PROFILE, TARGET);

  let package_flag = format!("--package={}", package);
  let target_flag = format!("--target={}", TARGET);
  let profile_flag = format!("--profile={}", PROFILE);
  let args = [
    "build",
    package_flag.as_str(),
    target_flag.as_str(),
    profile_flag.as_str(),
    "-Zbuild-std=std,panic_abort",
    "-Zbuild-std-features=optimize_for_size",
  ];

  let output = ctx.run("cargo", &args, &[("RUSTFLAGS", RUSTFLAGS)])?;
  if !output.success {
    return Err(SkiffError::Build(BuildError::Toolchain {
      stderr: output.stderr_utf8(),
    }));
  }

  let module = format!("{}_wasm.wasm", crate_name.replace('-', "_"));
  let built = ctx.root.join("target").join(TARGET).join(PROFILE).join(module);
  if !built.exists() {
    return Err(SkiffError::Build(BuildError::ArtifactMissing { path: built }));
  }

  let canonical = ctx.root.join(artifact_name(crate_name));
  fs::copy(&built, &canonical)?;
  println!("   ✅ Copied to {}", canonical.display());

  Ok(canonical)
}
