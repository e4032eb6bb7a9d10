//! Integration tests for `verset validate`

use crate::helpers::{TestWorkspace, run_verset, run_verset_ok, stderr, stdout};
use anyhow::Result;

#[test]
fn test_validate_passes_when_packable_projects_are_versioned() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_project("src/App", "App", "1.0.0")?;
  ws.add_unversioned_project("src/Tests", "Tests", false)?;

  let output = run_verset_ok(&ws.path, &["validate"])?;
  assert!(stdout(&output).contains("All packable projects have a <Version> tag"));

  Ok(())
}

#[test]
fn test_validate_fails_on_packable_without_version() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_project("src/App", "App", "1.0.0")?;
  ws.add_unversioned_project("src/Pack", "Pack", true)?;

  let output = run_verset(&ws.path, &["validate"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stdout(&output).contains("src/Pack/Pack.csproj - packable but missing <Version>"));
  assert!(stderr(&output).contains("Validation failed"));

  Ok(())
}

#[test]
fn test_validate_json_output() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_project("src/App", "App", "1.0.0")?;

  let output = run_verset_ok(&ws.path, &["validate", "--json"])?;
  let rows: serde_json::Value = serde_json::from_str(&stdout(&output))?;

  assert_eq!(rows[0]["path"], "src/App/App.csproj");
  assert_eq!(rows[0]["ok"], true);

  Ok(())
}

#[test]
fn test_validate_empty_workspace_is_fine() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_verset_ok(&ws.path, &["validate"])?;
  assert!(stdout(&output).contains("No project files"));

  Ok(())
}
