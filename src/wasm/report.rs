//! Artifact size reporting
//!
//! Rows are label → byte count in insertion order. Compressed variants are
//! measured by actually gzipping the bytes, never estimated. Rendering is a
//! fenced code block with labels left-justified to the widest label and
//! sizes right-justified to the widest digit count, so columns line up in
//! monospace output (PR comments, job summaries).

use crate::core::error::SkiffResult;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Serialize)]
pub struct SizeEntry {
  pub label: String,
  pub bytes: u64,
}

#[derive(Debug, Default)]
pub struct SizeReport {
  entries: Vec<SizeEntry>,
}

impl SizeReport {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a row; display order is insertion order
  pub fn add(&mut self, label: impl Into<String>, bytes: u64) {
    self.entries.push(SizeEntry {
      label: label.into(),
      bytes,
    });
  }

  /// Append the raw size and, right after it, the gzipped size as `<label>.gz`
  pub fn add_with_gzip(&mut self, label: &str, data: &[u8]) -> SkiffResult<()> {
    self.add(label, data.len() as u64);
    let compressed = gzip(data)?;
    self.add(format!("{}.gz", label), compressed.len() as u64);
    Ok(())
  }

  pub fn entries(&self) -> &[SizeEntry] {
    &self.entries
  }

  /// Render the aligned fenced table
  pub fn render(&self) -> String {
    let label_width = self.entries.iter().map(|e| e.label.len()).max().unwrap_or(0);
    let size_width = self
      .entries
      .iter()
      .map(|e| e.bytes.to_string().len())
      .max()
      .unwrap_or(0);

    let mut out = String::from("```\n");
    for entry in &self.entries {
      out.push_str(&format!(
        "{:<label_width$} is {:>size_width$} bytes\n",
        entry.label, entry.bytes
      ));
    }
    out.push_str("```");
    out
  }
}

/// Gzip `data` at the default level and return the compressed bytes
pub fn gzip(data: &[u8]) -> SkiffResult<Vec<u8>> {
  let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
  encoder.write_all(data)?;
  Ok(encoder.finish()?)
}
