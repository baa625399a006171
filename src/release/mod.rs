//! Release pipeline and publishing orchestration
//!
//! # Core invariants
//!
//! 1. **The version bump is the sole content of the release commit**
//!    - The manifest is rewritten first, then the working tree is validated
//!    - Any other pending change aborts the release before anything external
//!
//! 2. **The two manifest version fields always move together**
//!    - `workspace.package.version` and the exact pin of the self-dependency
//!
//! 3. **Publishing is strictly ordered with no rollback**
//!    - commit → push → hosted release, each gated on the previous step
//!    - A failure after push leaves a pushed-but-unpublished release; the
//!      operator finishes with `gh release create` manually
//!
//! The pipeline is: normalize version → rewrite manifest → refresh lockfile
//! (`cargo check`, skippable) → validate clean tree → publish.

use crate::core::context::WorkspaceContext;
use crate::core::error::{GitError, SkiffError, SkiffResult};
use crate::core::exec::command_failed;
use crate::manifest::ManifestFile;
use crate::vcs::{self, RepoState};
use crate::version;

/// Run the full release pipeline
///
/// `crate_name` is the self-referential dependency to pin; auto-detected from
/// the manifest when `None`. `verify` controls the `cargo check` lockfile
/// refresh between the manifest edit and the dirty check.
pub fn run_pipeline(
  ctx: &WorkspaceContext,
  crate_name: Option<&str>,
  version_arg: &str,
  verify: bool,
) -> SkiffResult<()> {
  let version = version::normalize(version_arg)?;

  let mut manifest = ManifestFile::load(ctx.manifest_path())?;
  let crate_name = match crate_name {
    Some(name) => name.to_string(),
    None => manifest.detect_self_dependency()?,
  };

  manifest.set_release_version(&crate_name, &version)?;
  manifest.save()?;
  println!("📝 Set version {} for '{}' in Cargo.toml", version, crate_name);

  if verify {
    refresh_lockfile(ctx)?;
  }

  match vcs::worktree_state(ctx, &vcs::BUMP_FILES)? {
    RepoState::Clean => {}
    RepoState::Dirty(summary) => {
      return Err(SkiffError::Git(GitError::DirtyWorkTree { summary }));
    }
  }

  publish(ctx, &version)?;

  println!();
  println!("✅ Released {}", version::tag(&version));
  Ok(())
}

/// Refresh Cargo.lock so it rides along in the release commit
fn refresh_lockfile(ctx: &WorkspaceContext) -> SkiffResult<()> {
  println!("🔍 Verifying workspace (cargo check)...");
  run_step(ctx, "cargo", &["check"])
}

/// Publish a validated release: commit, push, hosted release, in that order
///
/// Exactly three external commands. Each is a hard gate: a non-zero exit
/// stops the sequence immediately and nothing already done is undone.
pub fn publish(ctx: &WorkspaceContext, version: &str) -> SkiffResult<()> {
  let tag = version::tag(version);
  let message = format!("Release {}", tag);

  run_step(ctx, "git", &["commit", "--all", "--message", &message])?;
  println!("   ✅ Committed \"{}\"", message);

  run_step(ctx, "git", &["push"])?;
  println!("   ✅ Pushed to remote");

  run_step(ctx, "gh", &["release", "create", &tag, "--title", &tag])?;
  println!("   ✅ Created release {}", tag);

  Ok(())
}

fn run_step(ctx: &WorkspaceContext, program: &str, args: &[&str]) -> SkiffResult<()> {
  let output = ctx.run(program, args, &[])?;
  if !output.success {
    return Err(command_failed(program, args, &output));
  }
  Ok(())
}
