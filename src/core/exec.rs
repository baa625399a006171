//! External command execution behind a narrow capability interface
//!
//! Every external step (git, gh, cargo) goes through [`CommandRunner`] so the
//! release pipeline can be driven against a recording fake in tests instead
//! of spawning real processes. Invocations are blocking with no timeout: the
//! caller suspends until the child exits.

use crate::core::error::{SkiffError, SkiffResult};
use std::path::Path;
use std::process::Command;

/// Captured result of one external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
  pub success: bool,
  pub stdout: Vec<u8>,
  pub stderr: Vec<u8>,
}

impl CommandOutput {
  pub fn stdout_utf8(&self) -> String {
    String::from_utf8_lossy(&self.stdout).into_owned()
  }

  pub fn stderr_utf8(&self) -> String {
    String::from_utf8_lossy(&self.stderr).into_owned()
  }
}

/// One recorded invocation (program, args, env overrides)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: String,
  pub args: Vec<String>,
  pub env: Vec<(String, String)>,
}

impl Invocation {
  /// Render as a shell-like line for error messages
  pub fn display(&self) -> String {
    format!("{} {}", self.program, self.args.join(" "))
  }
}

/// Capability interface for spawning external processes
///
/// `env` entries are overrides on top of the inherited environment; nothing
/// else about the environment is touched.
pub trait CommandRunner {
  fn run(&self, cwd: &Path, program: &str, args: &[&str], env: &[(&str, &str)]) -> SkiffResult<CommandOutput>;
}

/// Real runner using std::process::Command (blocking, inherits environment)
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, cwd: &Path, program: &str, args: &[&str], env: &[(&str, &str)]) -> SkiffResult<CommandOutput> {
    let mut cmd = Command::new(program);
    cmd.current_dir(cwd).args(args);
    for (key, value) in env {
      cmd.env(key, value);
    }

    let output = cmd.output().map_err(|e| {
      SkiffError::with_help(
        format!("Failed to spawn {}: {}", program, e),
        format!("Is `{}` installed and on PATH?", program),
      )
    })?;

    Ok(CommandOutput {
      success: output.status.success(),
      stdout: output.stdout,
      stderr: output.stderr,
    })
  }
}

/// Build a typed error for a non-zero external exit
pub fn command_failed(program: &str, args: &[&str], output: &CommandOutput) -> SkiffError {
  SkiffError::Command(crate::core::error::CommandError {
    program: program.to_string(),
    args: args.iter().map(|s| s.to_string()).collect(),
    stderr: output.stderr_utf8(),
  })
}
