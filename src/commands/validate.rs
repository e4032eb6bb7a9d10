//! Validate command implementation
//!
//! A packable project without a <Version> tag will silently miss every
//! release; this command makes that a hard failure.

use crate::core::config::VersetConfig;
use crate::core::error::{VersetError, VersetResult};
use crate::manifest::discovery;
use crate::utils;
use serde::Serialize;
use std::env;

#[derive(Debug, Clone, Serialize)]
struct ValidationRow {
  path: String,
  packable: bool,
  versioned: bool,
  ok: bool,
}

/// Run the validate command
pub fn run_validate(json: bool) -> VersetResult<()> {
  let root = env::current_dir()?;
  let config = VersetConfig::load_or_default(&root)?;

  let rows: Vec<ValidationRow> = discovery::discover_projects(&root, &config.project_extension)?
    .into_iter()
    .map(|project| ValidationRow {
      path: utils::display_rel(&project.path, &root),
      packable: project.packable,
      versioned: project.has_version,
      ok: !project.packable || project.has_version,
    })
    .collect();

  if json {
    println!("{}", serde_json::to_string_pretty(&rows)?);
  } else if rows.is_empty() {
    println!("No project files (*.{}) found.", config.project_extension);
    return Ok(());
  } else {
    for row in &rows {
      if !row.ok {
        println!("  ❌ {} - packable but missing <Version>", row.path);
      } else if row.packable {
        println!("  ✅ {}", row.path);
      } else {
        println!("  -  {} - not packable", row.path);
      }
    }
    println!();
  }

  let failures = rows.iter().filter(|row| !row.ok).count();
  if failures > 0 {
    return Err(VersetError::message(format!(
      "Validation failed: {} packable project(s) missing a <Version> tag",
      failures
    )));
  }

  if !json {
    println!("✅ All packable projects have a <Version> tag.");
  }
  Ok(())
}
