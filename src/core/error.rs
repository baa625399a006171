//! Error types for cargo-skiff with contextual messages and exit codes
//!
//! A release that fails halfway cannot be cleanly undone, so every error here
//! is fatal to its workflow: nothing is retried, nothing is rolled back, and
//! the operator always sees which step failed and why.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for cargo-skiff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad version string, malformed manifest, invalid args)
  User = 1,
  /// System error (git, gh, cargo, I/O)
  System = 2,
  /// Validation failure (dirty working tree)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for cargo-skiff
#[derive(Debug)]
pub enum SkiffError {
  /// Manifest (Cargo.toml) errors
  Manifest(ManifestError),

  /// Git state errors
  Git(GitError),

  /// External command failures (git, gh, cargo)
  Command(CommandError),

  /// Wasm toolchain build failures
  Build(BuildError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl SkiffError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    SkiffError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    SkiffError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      SkiffError::Message { message, context, help } => SkiffError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      SkiffError::Manifest(_) => ExitCode::User,
      SkiffError::Git(GitError::DirtyWorkTree { .. }) => ExitCode::Validation,
      SkiffError::Git(_) => ExitCode::System,
      SkiffError::Command(_) => ExitCode::System,
      SkiffError::Build(_) => ExitCode::System,
      SkiffError::Io(_) => ExitCode::System,
      SkiffError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      SkiffError::Manifest(e) => e.help_message(),
      SkiffError::Git(e) => e.help_message(),
      SkiffError::Command(e) => e.help_message(),
      SkiffError::Build(e) => e.help_message(),
      SkiffError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for SkiffError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SkiffError::Manifest(e) => write!(f, "{}", e),
      SkiffError::Git(e) => write!(f, "{}", e),
      SkiffError::Command(e) => write!(f, "{}", e),
      SkiffError::Build(e) => write!(f, "{}", e),
      SkiffError::Io(e) => write!(f, "I/O error: {}", e),
      SkiffError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for SkiffError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      SkiffError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for SkiffError {
  fn from(err: io::Error) -> Self {
    SkiffError::Io(err)
  }
}

impl From<String> for SkiffError {
  fn from(msg: String) -> Self {
    SkiffError::message(msg)
  }
}

impl From<&str> for SkiffError {
  fn from(msg: &str) -> Self {
    SkiffError::message(msg)
  }
}

impl From<toml_edit::TomlError> for SkiffError {
  fn from(err: toml_edit::TomlError) -> Self {
    SkiffError::Manifest(ManifestError::Parse {
      message: err.to_string(),
    })
  }
}

impl From<serde_json::Error> for SkiffError {
  fn from(err: serde_json::Error) -> Self {
    SkiffError::message(format!("JSON error: {}", err))
  }
}

/// Manifest (Cargo.toml) errors
#[derive(Debug)]
pub enum ManifestError {
  /// Document failed to parse
  Parse { message: String },

  /// Expected key path does not exist
  MissingKey { path: String },

  /// Key path exists but is not a scalar string
  NotAString { path: String },

  /// No self-referential dependency found in [workspace.dependencies]
  SelfDependencyNotFound,

  /// Multiple candidate self-referential dependencies found
  SelfDependencyAmbiguous { candidates: Vec<String> },
}

impl ManifestError {
  fn help_message(&self) -> Option<String> {
    match self {
      ManifestError::MissingKey { path } => Some(format!(
        "Add `{}` to the workspace Cargo.toml, or run cargo-skiff from the workspace root.",
        path
      )),
      ManifestError::SelfDependencyNotFound => Some(
        "cargo-skiff looks for a [workspace.dependencies] entry with both `path` and `version` keys. Pass --crate to name it explicitly.".to_string(),
      ),
      ManifestError::SelfDependencyAmbiguous { candidates } => Some(format!(
        "Pass --crate to choose one of: {}",
        candidates.join(", ")
      )),
      _ => None,
    }
  }
}

impl fmt::Display for ManifestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ManifestError::Parse { message } => {
        write!(f, "Failed to parse Cargo.toml: {}", message)
      }
      ManifestError::MissingKey { path } => {
        write!(f, "Cargo.toml is missing required key: {}", path)
      }
      ManifestError::NotAString { path } => {
        write!(f, "Cargo.toml key is not a string: {}", path)
      }
      ManifestError::SelfDependencyNotFound => {
        write!(f, "No self-referential dependency found in [workspace.dependencies]")
      }
      ManifestError::SelfDependencyAmbiguous { candidates } => {
        write!(
          f,
          "Multiple path dependencies could be the release target: {}",
          candidates.join(", ")
        )
      }
    }
  }
}

/// Git state errors
#[derive(Debug)]
pub enum GitError {
  /// Not inside a git repository
  RepoNotFound { path: PathBuf },

  /// Working tree has pending changes beyond the version bump
  DirtyWorkTree { summary: String },

  /// A git query failed
  CommandFailed { command: String, stderr: String },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::DirtyWorkTree { .. } => Some(
        "Commit or stash the listed changes so the version bump is the only content of the release commit.".to_string(),
      ),
      GitError::RepoNotFound { path } => Some(format!(
        "Initialize the repository first or check the path: {}",
        path.display()
      )),
      _ => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::RepoNotFound { path } => {
        write!(f, "Git repository not found at: {}", path.display())
      }
      GitError::DirtyWorkTree { summary } => {
        write!(f, "Working tree has uncommitted changes:\n{}", summary)
      }
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
    }
  }
}

/// External command failure (non-zero exit from git, gh or cargo)
#[derive(Debug)]
pub struct CommandError {
  pub program: String,
  pub args: Vec<String>,
  pub stderr: String,
}

impl CommandError {
  fn help_message(&self) -> Option<String> {
    if self.program == "gh" {
      Some("The GitHub CLI must be installed and authenticated (`gh auth login`). The commit is already pushed; rerun `gh release create` manually to finish.".to_string())
    } else if self.program == "git" && self.stderr.contains("non-fast-forward") {
      Some("The remote has commits you don't have. Pull first, then rerun the release.".to_string())
    } else {
      None
    }
  }
}

impl fmt::Display for CommandError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Command failed: {} {}\n{}", self.program, self.args.join(" "), self.stderr)
  }
}

/// Wasm toolchain build failure
#[derive(Debug)]
pub enum BuildError {
  /// cargo build exited non-zero
  Toolchain { stderr: String },

  /// Build succeeded but the expected module is not where cargo puts it
  ArtifactMissing { path: PathBuf },
}

impl BuildError {
  fn help_message(&self) -> Option<String> {
    match self {
      BuildError::Toolchain { stderr } if stderr.contains("build-std") => Some(
        "Building the tiny profile requires a nightly toolchain with the rust-src component (`rustup component add rust-src`).".to_string(),
      ),
      _ => None,
    }
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildError::Toolchain { stderr } => {
        write!(f, "Wasm build failed:\n{}", stderr)
      }
      BuildError::ArtifactMissing { path } => {
        write!(f, "Build succeeded but no artifact at: {}", path.display())
      }
    }
  }
}

/// Result type alias for cargo-skiff
pub type SkiffResult<T> = Result<T, SkiffError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> SkiffResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> SkiffResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<SkiffError>,
{
  fn context(self, ctx: impl Into<String>) -> SkiffResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> SkiffResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &SkiffError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
