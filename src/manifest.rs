//! Lossless manifest version updates
//!
//! The workspace Cargo.toml is treated as a format-preserving document, not a
//! plain map: toml_edit keeps every comment, table order and whitespace
//! intact, so the only bytes that change are the two version fields the bump
//! targets. The same version must land in `workspace.package.version` and in
//! the exact-match pin of the self-referential dependency.

use crate::core::error::{ManifestError, SkiffError, SkiffResult};
use crate::version;
use std::fs;
use std::path::PathBuf;
use toml_edit::{DocumentMut, Item, Value};

pub struct ManifestFile {
  path: PathBuf,
  doc: DocumentMut,
}

impl ManifestFile {
  /// Parse the manifest at `path` into a lossless document
  pub fn load(path: PathBuf) -> SkiffResult<Self> {
    let content = fs::read_to_string(&path).map_err(|e| {
      SkiffError::with_help(
        format!("Failed to read {}: {}", path.display(), e),
        "Run cargo-skiff from the workspace root (the directory holding the workspace Cargo.toml).",
      )
    })?;
    let doc = content.parse::<DocumentMut>()?;
    Ok(Self { path, doc })
  }

  /// Find the self-referential dependency in [workspace.dependencies]
  ///
  /// The release target is the entry that pins the workspace's own crate:
  /// it carries both a `path` back into the workspace and a `version` pin.
  pub fn detect_self_dependency(&self) -> SkiffResult<String> {
    let deps = self
      .item_at(&["workspace", "dependencies"])?
      .as_table_like()
      .ok_or_else(|| missing_key(&["workspace", "dependencies"]))?;

    let candidates: Vec<String> = deps
      .iter()
      .filter(|(_, item)| {
        item
          .as_table_like()
          .is_some_and(|t| t.contains_key("path") && t.contains_key("version"))
      })
      .map(|(name, _)| name.to_string())
      .collect();

    if candidates.len() > 1 {
      return Err(SkiffError::Manifest(ManifestError::SelfDependencyAmbiguous { candidates }));
    }
    candidates
      .into_iter()
      .next()
      .ok_or(SkiffError::Manifest(ManifestError::SelfDependencyNotFound))
  }

  /// Write `version` into both version fields
  ///
  /// `workspace.package.version` gets the bare version; the dependency pin
  /// gets the `=`-prefixed exact match. Both writes preserve the original
  /// field decor (spacing, trailing comments).
  pub fn set_release_version(&mut self, crate_name: &str, version: &str) -> SkiffResult<()> {
    self.set_string(&["workspace", "package", "version"], version)?;
    self.set_string(
      &["workspace", "dependencies", crate_name, "version"],
      &version::exact_pin(version),
    )?;
    Ok(())
  }

  /// Write the document back to its original path
  pub fn save(&self) -> SkiffResult<()> {
    fs::write(&self.path, self.doc.to_string())?;
    Ok(())
  }

  fn item_at(&self, path: &[&str]) -> SkiffResult<&Item> {
    let mut item: &Item = self.doc.as_item();
    for (depth, key) in path.iter().enumerate() {
      item = item
        .as_table_like()
        .and_then(|t| t.get(key))
        .ok_or_else(|| missing_key(&path[..=depth]))?;
    }
    Ok(item)
  }

  fn set_string(&mut self, path: &[&str], new: &str) -> SkiffResult<()> {
    let mut item: &mut Item = self.doc.as_item_mut();
    for (depth, key) in path.iter().enumerate() {
      item = item
        .as_table_like_mut()
        .and_then(|t| t.get_mut(key))
        .ok_or_else(|| missing_key(&path[..=depth]))?;
    }

    let value = item
      .as_value_mut()
      .filter(|v| v.is_str())
      .ok_or_else(|| SkiffError::Manifest(ManifestError::NotAString { path: path.join(".") }))?;

    // Keep the original decor so spacing and inline comments survive
    let decor = value.decor().clone();
    let mut replacement = Value::from(new);
    *replacement.decor_mut() = decor;
    *value = replacement;
    Ok(())
  }
}

fn missing_key(path: &[&str]) -> SkiffError {
  SkiffError::Manifest(ManifestError::MissingKey { path: path.join(".") })
}
