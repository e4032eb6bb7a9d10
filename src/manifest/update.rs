//! In-place manifest version updates
//!
//! A manifest is treated as opaque text around a single `<Version>` span.
//! Updates splice a new value into that span and leave every other byte
//! untouched, so hand-formatted project files survive a publish verbatim.

use crate::core::error::{ResultExt, VersetError, VersetResult};
use std::fs;
use std::path::Path;

const VERSION_OPEN: &str = "<Version>";
const VERSION_CLOSE: &str = "</Version>";

/// A manifest split around its version marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpan<'a> {
  pub prefix: &'a str,
  pub value: &'a str,
  pub suffix: &'a str,
}

/// Split manifest content around the first `<Version>…</Version>` span
pub fn split_version_span(content: &str) -> Option<VersionSpan<'_>> {
  let open = content.find(VERSION_OPEN)?;
  let value_start = open + VERSION_OPEN.len();
  let close = content[value_start..].find(VERSION_CLOSE)? + value_start;

  Some(VersionSpan {
    prefix: &content[..value_start],
    value: &content[value_start..close],
    suffix: &content[close..],
  })
}

/// Declared version of a manifest, if it carries a version marker
pub fn declared_version(content: &str) -> Option<&str> {
  split_version_span(content).map(|span| span.value)
}

/// Whether a manifest is eligible for changeset-driven updates
pub fn has_version_marker(content: &str) -> bool {
  split_version_span(content).is_some()
}

/// Rewrite the declared version of the manifest at `path`
///
/// Fails when the file cannot be read or written, or when the expected
/// marker is absent. The publish pipeline reports these per project instead
/// of aborting.
pub fn update_version(path: &Path, new_version: &str) -> VersetResult<()> {
  let content = fs::read_to_string(path)
    .with_context(|| format!("Failed to read manifest {}", path.display()))?;

  let span = split_version_span(&content).ok_or_else(|| {
    VersetError::message(format!("No <Version> tag in {}", path.display()))
  })?;

  let updated = format!("{}{}{}", span.prefix, new_version, span.suffix);
  fs::write(path, updated)
    .with_context(|| format!("Failed to write manifest {}", path.display()))?;

  Ok(())
}
