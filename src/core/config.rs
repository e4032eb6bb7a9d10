//! Configuration for verset
//!
//! Searched in order: verset.toml, .verset.toml, .config/verset.toml.
//! Every field has a default, so running without a config file is the
//! common case.

use crate::core::error::{ConfigError, VersetError, VersetResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for verset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersetConfig {
  /// Directory holding pending changeset files and the version state file
  #[serde(default = "default_changes_dir")]
  pub changes_dir: PathBuf,

  /// File name of per-project changelogs, written next to each manifest
  #[serde(default = "default_changelog_name")]
  pub changelog_name: String,

  /// Path of the aggregate changelog, relative to the workspace root
  #[serde(default = "default_root_changelog")]
  pub root_changelog: PathBuf,

  /// Extension of project manifest files discovered during scans
  #[serde(default = "default_project_extension")]
  pub project_extension: String,
}

fn default_changes_dir() -> PathBuf {
  PathBuf::from(".changes")
}

fn default_changelog_name() -> String {
  "CHANGELOG.md".to_string()
}

fn default_root_changelog() -> PathBuf {
  PathBuf::from("CHANGELOG.md")
}

fn default_project_extension() -> String {
  "csproj".to_string()
}

impl Default for VersetConfig {
  fn default() -> Self {
    Self {
      changes_dir: default_changes_dir(),
      changelog_name: default_changelog_name(),
      root_changelog: default_root_changelog(),
      project_extension: default_project_extension(),
    }
  }
}

impl VersetConfig {
  /// Find config file in search order: verset.toml, .verset.toml, .config/verset.toml
  pub fn find_config_path(root: &Path) -> Option<PathBuf> {
    let candidates = vec![
      root.join("verset.toml"),
      root.join(".verset.toml"),
      root.join(".config").join("verset.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from disk, falling back to defaults when no file exists
  pub fn load_or_default(root: &Path) -> VersetResult<Self> {
    let Some(config_path) = Self::find_config_path(root) else {
      return Ok(Self::default());
    };

    let content = fs::read_to_string(&config_path)?;
    let config: VersetConfig = toml_edit::de::from_str(&content).map_err(|e| {
      VersetError::Config(ConfigError::Malformed {
        path: config_path.clone(),
        reason: e.to_string(),
      })
    })?;

    Ok(config)
  }

  /// Location of the persisted current-version file
  pub fn version_file(&self) -> PathBuf {
    self.changes_dir.join(".version")
  }
}
