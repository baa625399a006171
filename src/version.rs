//! Version string normalization
//!
//! The manifest never stores a `v` prefix; the release tag and the hosted
//! release always carry one. No version arithmetic happens here: callers
//! decide the version, this module only validates and reshapes it.

use crate::core::error::{SkiffError, SkiffResult};

/// Strip an optional leading `v` and validate the rest as a semantic version
pub fn normalize(input: &str) -> SkiffResult<String> {
  let bare = input.strip_prefix('v').unwrap_or(input);
  let parsed = semver::Version::parse(bare).map_err(|e| {
    SkiffError::with_help(
      format!("Invalid version '{}': {}", input, e),
      "Pass a semantic version like 1.2.3 (a leading `v` is accepted and stripped).",
    )
  })?;
  Ok(parsed.to_string())
}

/// The `v`-prefixed tag for a normalized version
pub fn tag(version: &str) -> String {
  format!("v{}", version)
}

/// The exact-match pin written into the self-referential dependency
pub fn exact_pin(version: &str) -> String {
  format!("={}", version)
}
