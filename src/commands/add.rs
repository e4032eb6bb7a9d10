//! Add command implementation
//!
//! Records one pending changeset: severity, affected projects, and a
//! description. Projects are validated against the discovered manifest set
//! so a typo fails here instead of surfacing as a missing project at
//! publish time.

use crate::changeset::{ChangeSeverity, ChangesetStore};
use crate::core::config::VersetConfig;
use crate::core::error::{ResultExt, VersetError, VersetResult};
use crate::manifest::discovery;
use crate::utils;
use chrono::Utc;
use std::env;
use std::io::Read;

/// Run the add command
pub fn run_add(
  severity: String,
  projects: Vec<String>,
  all: bool,
  message: Option<String>,
) -> VersetResult<()> {
  let severity = ChangeSeverity::parse(&severity).ok_or_else(|| {
    VersetError::message(format!(
      "Unknown severity '{}'. Use patch, minor, or major",
      severity
    ))
  })?;

  let root = env::current_dir()?;
  let config = VersetConfig::load_or_default(&root)?;

  let discovered = discovery::discover_projects(&root, &config.project_extension)?;
  let (eligible, ineligible): (Vec<_>, Vec<_>) =
    discovered.into_iter().partition(|p| p.has_version);

  if !ineligible.is_empty() {
    eprintln!("⚠️  Skipping projects without a <Version> tag:");
    for project in &ineligible {
      eprintln!("   {}", utils::display_rel(&project.path, &root));
    }
    eprintln!();
  }

  if eligible.is_empty() {
    return Err(VersetError::message(format!(
      "No eligible project files found (*.{} with a <Version> tag)",
      config.project_extension
    )));
  }

  let eligible_rel: Vec<String> = eligible
    .iter()
    .map(|p| utils::display_rel(&p.path, &root))
    .collect();

  let selected: Vec<String> = if all {
    eligible_rel.clone()
  } else {
    for project in &projects {
      if !eligible_rel.iter().any(|e| e == project) {
        return Err(VersetError::message(format!(
          "Project '{}' is not an eligible manifest. Known projects:\n  {}",
          project,
          eligible_rel.join("\n  ")
        )));
      }
    }
    projects
  };

  if selected.is_empty() {
    return Err(VersetError::message(
      "No projects selected. Pass --project <PATH> (repeatable) or --all",
    ));
  }

  let body = match message {
    Some(message) => message,
    None => {
      // no --message: read the description from stdin until EOF
      let mut buffer = String::new();
      std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read change description from stdin")?;
      buffer
    }
  };
  let body = body.trim();

  if body.is_empty() {
    return Err(VersetError::message(
      "No change description provided. Pass --message or pipe one on stdin",
    ));
  }

  let store = ChangesetStore::new(root.join(&config.changes_dir));
  let path = store.save(severity, body, &selected, Utc::now())?;

  println!("✅ Changeset saved to: {}", utils::display_rel(&path, &root));
  println!("   Severity: {}", severity);
  println!("   Projects: {}", selected.len());

  Ok(())
}
