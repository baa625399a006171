//! Repository state validation via system git
//!
//! A release must never proceed from a dirty working tree. The check runs
//! after the manifest edit, so the files the bump itself touches (Cargo.toml
//! and Cargo.lock) are exempt; anything else pending means the operator has
//! unfinished work that would be swept into the release commit.

use crate::core::context::WorkspaceContext;
use crate::core::error::{GitError, SkiffError, SkiffResult};

/// Files the version bump is allowed to leave modified
pub const BUMP_FILES: [&str; 2] = ["Cargo.toml", "Cargo.lock"];

/// Transient working-tree state, re-queried on every release run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoState {
  Clean,
  Dirty(String),
}

/// Query `git status --porcelain` and classify the working tree
///
/// `exempt` paths are ignored when deciding cleanliness. Untracked files
/// count as dirty; renames always count, even of exempt files.
pub fn worktree_state(ctx: &WorkspaceContext, exempt: &[&str]) -> SkiffResult<RepoState> {
  let output = ctx.run("git", &["status", "--porcelain"], &[])?;

  if !output.success {
    let stderr = output.stderr_utf8();
    if stderr.contains("not a git repository") {
      return Err(SkiffError::Git(GitError::RepoNotFound {
        path: ctx.root.clone(),
      }));
    }
    return Err(SkiffError::Git(GitError::CommandFailed {
      command: "git status --porcelain".to_string(),
      stderr,
    }));
  }

  let pending = pending_changes(&output.stdout_utf8(), exempt);
  if pending.is_empty() {
    Ok(RepoState::Clean)
  } else {
    Ok(RepoState::Dirty(pending.join("\n")))
  }
}

/// Porcelain lines that make the tree dirty, given exempt paths
///
/// Porcelain v1 lines are `XY <path>`, or `XY <old> -> <new>` for renames.
fn pending_changes(porcelain: &str, exempt: &[&str]) -> Vec<String> {
  porcelain
    .lines()
    .filter(|line| line.len() >= 4)
    .filter(|line| {
      let path = &line[3..];
      // A rename is never just the bump: something else moved
      path.contains(" -> ") || !exempt.contains(&path)
    })
    .map(|line| line.to_string())
    .collect()
}
