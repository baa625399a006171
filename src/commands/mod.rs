//! CLI commands for cargo-skiff
//!
//! - **release**: bump the manifest version, validate the tree, then
//!   commit, push and create the hosted GitHub release
//! - **version**: bump the manifest version fields and stop
//! - **wasm**: build the size-optimized wasm artifact and report sizes
//! - **summary**: one-line size of the canonical artifact on disk
//!
//! All commands accept `&WorkspaceContext` so external processes and the
//! working directory stay explicit and fakeable.

use crate::core::context::WorkspaceContext;
use crate::core::error::{ResultExt, SkiffError, SkiffResult};
use crate::manifest::ManifestFile;
use crate::release;
use crate::version;
use crate::wasm::{self, report::SizeReport};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// `cargo skiff release <version>`
pub fn run_release(
  ctx: &WorkspaceContext,
  version_arg: &str,
  crate_name: Option<String>,
  no_verify: bool,
) -> SkiffResult<()> {
  release::run_pipeline(ctx, crate_name.as_deref(), version_arg, !no_verify)
}

/// `cargo skiff version <version>` - manifest bump only, nothing external
pub fn run_version(ctx: &WorkspaceContext, version_arg: &str, crate_name: Option<String>) -> SkiffResult<()> {
  let version = version::normalize(version_arg)?;

  let mut manifest = ManifestFile::load(ctx.manifest_path())?;
  let crate_name = match crate_name {
    Some(name) => name,
    None => manifest.detect_self_dependency()?,
  };

  manifest.set_release_version(&crate_name, &version)?;
  manifest.save()?;

  println!("📝 Set version {} for '{}' in Cargo.toml", version, crate_name);
  Ok(())
}

/// `cargo skiff wasm` - build, measure, report
pub fn run_wasm(
  ctx: &WorkspaceContext,
  output: Option<PathBuf>,
  crate_name: Option<String>,
  json: bool,
) -> SkiffResult<()> {
  let crate_name = resolve_crate_name(ctx, crate_name)?;

  let artifact = wasm::build_artifact(ctx, &crate_name)?;
  let bytes = fs::read(&artifact).with_context(|| format!("Failed to read {}", artifact.display()))?;

  let mut report = SizeReport::new();
  report.add_with_gzip(&wasm::artifact_name(&crate_name), &bytes)?;

  let rendered = if json {
    serde_json::to_string_pretty(report.entries())?
  } else {
    report.render()
  };

  match output {
    Some(path) => {
      // Appended, so repeated runs accumulate in job summaries
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(ctx.root.join(path))?;
      writeln!(file, "{}", rendered)?;
    }
    None => println!("{}", rendered),
  }

  Ok(())
}

/// `cargo skiff summary` - stat the canonical artifact, one markdown line
pub fn run_summary(ctx: &WorkspaceContext, crate_name: Option<String>) -> SkiffResult<()> {
  let crate_name = resolve_crate_name(ctx, crate_name)?;
  let name = wasm::artifact_name(&crate_name);

  let size = fs::metadata(ctx.root.join(&name))
    .map_err(|e| {
      SkiffError::with_help(
        format!("Failed to read {}: {}", name, e),
        "Build the artifact first with `cargo skiff wasm`.",
      )
    })?
    .len();

  println!("`{}` is {} bytes.", name, size);
  Ok(())
}

/// Explicit --crate wins; otherwise detect the self-dependency in the manifest
fn resolve_crate_name(ctx: &WorkspaceContext, crate_name: Option<String>) -> SkiffResult<String> {
  match crate_name {
    Some(name) => Ok(name),
    None => ManifestFile::load(ctx.manifest_path())?.detect_self_dependency(),
  }
}
