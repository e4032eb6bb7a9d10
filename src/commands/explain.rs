//! Explain command implementation
//!
//! Summarizes every discovered project file: declared version, whether it
//! carries a <Version> tag, and whether it is packable.

use crate::core::config::VersetConfig;
use crate::core::error::VersetResult;
use crate::manifest::discovery;
use crate::utils;
use serde::Serialize;
use std::env;

/// One row of the explain table
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRow {
  pub path: String,
  pub version: Option<String>,
  pub versioned: bool,
  pub packable: bool,
}

/// Run the explain command
pub fn run_explain(json: bool) -> VersetResult<()> {
  let root = env::current_dir()?;
  let config = VersetConfig::load_or_default(&root)?;

  let rows: Vec<ProjectRow> = discovery::discover_projects(&root, &config.project_extension)?
    .into_iter()
    .map(|project| ProjectRow {
      path: utils::display_rel(&project.path, &root),
      version: project.declared_version,
      versioned: project.has_version,
      packable: project.packable,
    })
    .collect();

  if json {
    println!("{}", serde_json::to_string_pretty(&rows)?);
    return Ok(());
  }

  if rows.is_empty() {
    println!("No project files (*.{}) found.", config.project_extension);
    return Ok(());
  }

  print_table(&rows);
  Ok(())
}

fn print_table(rows: &[ProjectRow]) {
  let version_width = rows
    .iter()
    .filter_map(|r| r.version.as_deref())
    .map(str::len)
    .chain(["Version".len()])
    .max()
    .unwrap_or(7);

  println!("{:<width$}  {:<9}  {:<8}  Project", "Version", "Versioned", "Packable", width = version_width);

  for row in rows {
    let version = row.version.as_deref().unwrap_or("-");
    let versioned = if row.versioned { "✓" } else { "✗" };
    let packable = if row.packable { "✓" } else { "✗" };
    println!(
      "{:<width$}  {:<9}  {:<8}  {}",
      version,
      versioned,
      packable,
      row.path,
      width = version_width
    );
  }
}
