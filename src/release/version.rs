//! Persisted current-version state and bump arithmetic
//!
//! The "current version" is a single text file containing `major.minor.patch`.
//! Reads are lenient: a missing, empty, or mangled value degrades to `0.0.0`
//! component-wise instead of failing, so a fresh repository publishes its
//! first version without any setup step.

use crate::changeset::ChangeSeverity;
use crate::core::error::{ResultExt, VersetResult};
use semver::Version;
use std::fs;
use std::path::PathBuf;

/// Reads and writes the persisted current version
pub struct VersionState {
  file: PathBuf,
}

impl VersionState {
  pub fn new(file: impl Into<PathBuf>) -> Self {
    Self { file: file.into() }
  }

  /// Current persisted version, `0.0.0` when absent or unreadable
  pub fn current(&self) -> Version {
    match fs::read_to_string(&self.file) {
      Ok(content) if !content.trim().is_empty() => parse_lenient(content.trim()),
      _ => Version::new(0, 0, 0),
    }
  }

  /// Durably write the canonical `major.minor.patch` string
  pub fn persist(&self, version: &Version) -> VersetResult<()> {
    if let Some(parent) = self.file.parent() {
      fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&self.file, version.to_string())
      .with_context(|| format!("Failed to write {}", self.file.display()))?;
    Ok(())
  }
}

/// Parse a version string, degrading malformed components to 0
///
/// A value that does not split into exactly three `.` fields yields `0.0.0`;
/// otherwise each field parses independently, defaulting to 0.
pub fn parse_lenient(text: &str) -> Version {
  let parts: Vec<&str> = text.split('.').collect();
  if parts.len() != 3 {
    return Version::new(0, 0, 0);
  }

  let component = |s: &str| s.trim().parse::<u64>().unwrap_or(0);
  Version::new(component(parts[0]), component(parts[1]), component(parts[2]))
}

/// Next version for a bump severity
///
/// Major zeroes minor and patch, Minor zeroes patch, Patch increments patch
/// only. Always strictly greater than `current`.
pub fn bump(current: &Version, severity: ChangeSeverity) -> Version {
  match severity {
    ChangeSeverity::Major => Version::new(current.major + 1, 0, 0),
    ChangeSeverity::Minor => Version::new(current.major, current.minor + 1, 0),
    ChangeSeverity::Patch => Version::new(current.major, current.minor, current.patch + 1),
  }
}
