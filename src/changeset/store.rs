//! Changeset file-set management
//!
//! The changeset directory is a tiny filesystem queue: one `*.md` file per
//! pending change, enumerated deterministically and consumed by publish.
//! The store owns no business logic beyond that.

use crate::changeset::record::{self, ChangeSeverity, ChangesetRecord};
use crate::core::error::{ResultExt, VersetResult};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Lists, loads, saves, and deletes changeset records in one directory
pub struct ChangesetStore {
  dir: PathBuf,
}

impl ChangesetStore {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// The changeset directory this store manages
  pub fn dir(&self) -> &Path {
    &self.dir
  }

  /// Enumerate pending changeset files
  ///
  /// The filesystem gives no ordering guarantee, so file names are sorted to
  /// make the load order (and therefore tie-breaking) deterministic.
  pub fn list_pending(&self) -> VersetResult<Vec<PathBuf>> {
    if !self.dir.is_dir() {
      return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&self.dir)? {
      let path = entry?.path();
      if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
        files.push(path);
      }
    }
    files.sort();
    Ok(files)
  }

  /// Load every decodable changeset, sorted by creation time ascending
  ///
  /// Undecodable files are skipped with a warning; a malformed record must
  /// never abort a publish. Ties on `created_at` keep the sorted file-name
  /// order, which keeps changelog section ordering stable across runs.
  pub fn load_all(&self) -> VersetResult<Vec<ChangesetRecord>> {
    let mut records = Vec::new();

    for path in self.list_pending()? {
      let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read changeset {}", path.display()))?;

      match record::decode(&content) {
        Ok(mut parsed) => {
          parsed.source_path = Some(path);
          records.push(parsed);
        }
        Err(failure) => {
          eprintln!("⚠️  Skipping malformed changeset {}: {}", path.display(), failure);
        }
      }
    }

    records.sort_by_key(|r| r.created_at);
    Ok(records)
  }

  /// Persist a draft as a new changeset file and return its path
  pub fn save(
    &self,
    severity: ChangeSeverity,
    body: &str,
    projects: &[String],
    created_at: DateTime<Utc>,
  ) -> VersetResult<PathBuf> {
    fs::create_dir_all(&self.dir)
      .with_context(|| format!("Failed to create {}", self.dir.display()))?;

    let record = ChangesetRecord {
      source_path: None,
      severity,
      created_at,
      body: body.trim_end().to_string(),
      projects: projects.to_vec(),
    };

    let path = self.dir.join(record.file_name());
    fs::write(&path, record::encode(severity, body, projects, created_at))
      .with_context(|| format!("Failed to write changeset {}", path.display()))?;

    Ok(path)
  }

  /// Best-effort removal of consumed changeset files
  ///
  /// A file that is already gone is not an error; re-running publish after a
  /// crash must not trip over its own earlier cleanup.
  pub fn delete(&self, records: &[ChangesetRecord]) -> VersetResult<()> {
    for record in records {
      let Some(path) = &record.source_path else {
        continue;
      };
      match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
          return Err(err).with_context(|| format!("Failed to delete {}", path.display()));
        }
      }
    }
    Ok(())
  }
}
