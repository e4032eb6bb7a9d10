//! Integration tests for `verset add`

use crate::helpers::{TestWorkspace, run_verset, run_verset_ok, stderr, stdout};
use anyhow::Result;

#[test]
fn test_add_writes_changeset_file() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let project = ws.add_project("src/App", "App", "1.0.0")?;

  let output = run_verset_ok(
    &ws.path,
    &["add", "--severity", "minor", "--project", &project, "--message", "Add X"],
  )?;
  assert!(stdout(&output).contains("Changeset saved to"));

  assert_eq!(ws.pending_changesets(), 1);

  // the saved record is consumable by publish
  ws.set_version("1.2.3")?;
  run_verset_ok(&ws.path, &["publish"])?;
  assert!(ws.read(&project)?.contains("<Version>1.3.0</Version>"));
  assert_eq!(ws.read("src/App/CHANGELOG.md")?, "## 1.3.0\n\nAdd X\n");

  Ok(())
}

#[test]
fn test_add_severity_is_case_insensitive() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let project = ws.add_project("src/App", "App", "1.0.0")?;

  run_verset_ok(
    &ws.path,
    &["add", "--severity", "Major", "--project", &project, "--message", "Break"],
  )?;

  let changes: Vec<_> = std::fs::read_dir(ws.path.join(".changes"))?
    .filter_map(|e| e.ok())
    .collect();
  let content = std::fs::read_to_string(changes[0].path())?;
  assert!(content.contains("changeset: major"));

  Ok(())
}

#[test]
fn test_add_unknown_severity_fails() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let project = ws.add_project("src/App", "App", "1.0.0")?;

  let output = run_verset(
    &ws.path,
    &["add", "--severity", "huge", "--project", &project, "--message", "x"],
  )?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Unknown severity"));
  assert_eq!(ws.pending_changesets(), 0);

  Ok(())
}

#[test]
fn test_add_all_selects_every_eligible_project() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_project("src/A", "A", "1.0.0")?;
  ws.add_project("src/B", "B", "1.0.0")?;
  ws.add_unversioned_project("src/Tool", "Tool", false)?;

  let output = run_verset_ok(
    &ws.path,
    &["add", "--severity", "patch", "--all", "--message", "Touch all"],
  )?;

  // the unversioned project is warned about, not selected
  assert!(stderr(&output).contains("src/Tool/Tool.csproj"));
  assert!(stdout(&output).contains("Projects: 2"));

  Ok(())
}

#[test]
fn test_add_rejects_unknown_project() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_project("src/App", "App", "1.0.0")?;

  let output = run_verset(
    &ws.path,
    &["add", "--severity", "patch", "--project", "src/Nope/Nope.csproj", "--message", "x"],
  )?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("not an eligible manifest"));

  Ok(())
}

#[test]
fn test_add_without_projects_fails() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_project("src/App", "App", "1.0.0")?;

  let output = run_verset(&ws.path, &["add", "--severity", "patch", "--message", "x"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("No projects selected"));

  Ok(())
}

#[test]
fn test_add_without_eligible_projects_fails() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_unversioned_project("src/Tool", "Tool", false)?;

  let output = run_verset(&ws.path, &["add", "--severity", "patch", "--all", "--message", "x"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("No eligible project files"));

  Ok(())
}
