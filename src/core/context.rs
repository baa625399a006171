//! Workspace context - build once in main, pass everywhere
//!
//! Holds the two pieces of ambient process state the workflows depend on:
//! the workspace root and the external-command runner. Keeping both on an
//! explicit context (instead of reading the cwd or spawning ad hoc) is what
//! makes the ordering-dependent release pipeline testable with fakes.

use crate::core::error::SkiffResult;
use crate::core::exec::{CommandOutput, CommandRunner, SystemRunner};
use std::path::PathBuf;

pub struct WorkspaceContext {
  /// Workspace root directory; all commands run with this as cwd
  pub root: PathBuf,

  /// External command capability (real processes, or a recording fake)
  runner: Box<dyn CommandRunner>,
}

impl WorkspaceContext {
  /// Context backed by real subprocess execution
  pub fn new(root: PathBuf) -> Self {
    Self {
      root,
      runner: Box::new(SystemRunner),
    }
  }

  /// Context backed by an arbitrary runner (tests)
  #[cfg(test)]
  pub fn with_runner(root: PathBuf, runner: Box<dyn CommandRunner>) -> Self {
    Self { root, runner }
  }

  /// Run an external command at the workspace root, blocking until it exits
  pub fn run(&self, program: &str, args: &[&str], env: &[(&str, &str)]) -> SkiffResult<CommandOutput> {
    self.runner.run(&self.root, program, args, env)
  }

  /// Path to the workspace manifest
  pub fn manifest_path(&self) -> PathBuf {
    self.root.join("Cargo.toml")
  }
}
