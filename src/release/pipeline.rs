//! Publish pipeline: fold all pending changesets into one release
//!
//! Single pass, strictly sequential:
//!
//! 1. load pending changesets (empty → nothing to publish)
//! 2. aggregate the maximum severity across every record
//! 3. bump the persisted current version once, globally
//! 4. group records by affected project
//! 5. per project: rewrite the manifest version and append its changelog —
//!    a missing project degrades that project only, the rest continue
//! 6. append the aggregate section to the root changelog
//! 7. persist the new version
//! 8. delete the consumed changeset files
//!
//! Steps 6–8 run even when some projects failed in step 5: the next publish
//! must build on the new version, and re-running cannot fix a structurally
//! missing manifest. Forward progress wins over all-or-nothing atomicity;
//! every destructive step here is individually safe to repeat.

use crate::changeset::{ChangeSeverity, ChangesetRecord, ChangesetStore};
use crate::core::config::VersetConfig;
use crate::core::error::{VersetError, VersetResult};
use crate::manifest::update;
use crate::release::changelog;
use crate::release::version::{self, VersionState};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Outcome of one project's update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
  /// Manifest and changelog were rewritten
  Updated,
  /// Manifest path does not exist on disk
  NotFound,
  /// Manifest exists but could not be rewritten
  Failed { reason: String },
}

/// Per-project entry in the publish report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectOutcome {
  pub project: String,
  pub status: ProjectStatus,
}

/// What a publish did (or, in dry-run mode, would do)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishReport {
  pub previous_version: Version,
  pub new_version: Version,
  pub severity: ChangeSeverity,
  pub changesets: usize,
  pub projects: Vec<ProjectOutcome>,
}

impl PublishReport {
  /// Whether any per-project step failed
  pub fn degraded(&self) -> bool {
    self
      .projects
      .iter()
      .any(|outcome| outcome.status != ProjectStatus::Updated)
  }

  /// Number of projects that were not updated
  pub fn failed_count(&self) -> usize {
    self
      .projects
      .iter()
      .filter(|outcome| outcome.status != ProjectStatus::Updated)
      .count()
  }
}

/// Orchestrates a publish over one workspace root
pub struct PublishPipeline {
  root: PathBuf,
  store: ChangesetStore,
  state: VersionState,
  changelog_name: String,
  root_changelog: PathBuf,
}

impl PublishPipeline {
  pub fn new(root: &Path, config: &VersetConfig) -> Self {
    Self {
      root: root.to_path_buf(),
      store: ChangesetStore::new(root.join(&config.changes_dir)),
      state: VersionState::new(root.join(config.version_file())),
      changelog_name: config.changelog_name.clone(),
      root_changelog: root.join(&config.root_changelog),
    }
  }

  /// Run the pipeline; `dry_run` computes the report without touching files
  pub fn run(&self, dry_run: bool) -> VersetResult<PublishReport> {
    let records = self.store.load_all()?;
    if records.is_empty() {
      return Err(VersetError::NoPendingChanges {
        changes_dir: self.store.dir().to_path_buf(),
      });
    }

    let severity = records
      .iter()
      .map(|r| r.severity)
      .max()
      .unwrap_or(ChangeSeverity::Patch);

    let previous_version = self.state.current();
    let new_version = version::bump(&previous_version, severity);

    let groups = group_by_project(&records);

    let mut outcomes = Vec::new();
    for group in &groups {
      let status = self.apply_project(group, &records, &new_version, dry_run);
      outcomes.push(ProjectOutcome {
        project: group.project.clone(),
        status,
      });
    }

    if !dry_run {
      // root changelog gets every record, regardless of per-project failures
      let all_bodies = concat_bodies(records.iter().collect::<Vec<_>>().as_slice());
      changelog::append(&self.root_changelog, &new_version, &all_bodies)?;

      self.state.persist(&new_version)?;

      // consumed even when a project was missing: re-running cannot retry a
      // manifest that no longer exists
      self.store.delete(&records)?;
    }

    Ok(PublishReport {
      previous_version,
      new_version,
      severity,
      changesets: records.len(),
      projects: outcomes,
    })
  }

  fn apply_project(
    &self,
    group: &ProjectGroup,
    records: &[ChangesetRecord],
    new_version: &Version,
    dry_run: bool,
  ) -> ProjectStatus {
    let manifest_path = self.root.join(&group.project);
    if !manifest_path.is_file() {
      return ProjectStatus::NotFound;
    }

    if dry_run {
      return ProjectStatus::Updated;
    }

    if let Err(err) = update::update_version(&manifest_path, &new_version.to_string()) {
      return ProjectStatus::Failed {
        reason: err.to_string(),
      };
    }

    let bodies: Vec<&ChangesetRecord> = group.records.iter().map(|&i| &records[i]).collect();
    let body = concat_bodies(&bodies);

    let changelog_path = match manifest_path.parent() {
      Some(dir) => dir.join(&self.changelog_name),
      None => return ProjectStatus::Updated,
    };
    if let Err(err) = changelog::append(&changelog_path, new_version, &body) {
      return ProjectStatus::Failed {
        reason: err.to_string(),
      };
    }

    ProjectStatus::Updated
  }
}

/// Records touching one project, in `created_at` order
struct ProjectGroup {
  project: String,
  /// Indices into the loaded record list
  records: Vec<usize>,
}

/// Group records by project, first-appearance order, duplicates collapsed
///
/// Records arrive sorted by `created_at`, so each group's record list is
/// already in changelog order.
fn group_by_project(records: &[ChangesetRecord]) -> Vec<ProjectGroup> {
  let mut groups: Vec<ProjectGroup> = Vec::new();
  let mut index: HashMap<&str, usize> = HashMap::new();

  for (ri, record) in records.iter().enumerate() {
    for project in &record.projects {
      let gi = *index.entry(project.as_str()).or_insert_with(|| {
        groups.push(ProjectGroup {
          project: project.clone(),
          records: Vec::new(),
        });
        groups.len() - 1
      });

      // a project listed twice in one record contributes its body once
      if groups[gi].records.last() != Some(&ri) {
        groups[gi].records.push(ri);
      }
    }
  }

  groups
}

/// Blank-line separated concatenation of record bodies
fn concat_bodies(records: &[&ChangesetRecord]) -> String {
  records
    .iter()
    .map(|r| r.body.as_str())
    .collect::<Vec<_>>()
    .join("\n\n")
}
