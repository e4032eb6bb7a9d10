//! Integration tests for `verset explain`

use crate::helpers::{TestWorkspace, run_verset_ok, stdout};
use anyhow::Result;

#[test]
fn test_explain_lists_projects() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_project("src/App", "App", "1.2.3")?;
  ws.add_unversioned_project("src/Tool", "Tool", false)?;

  let output = run_verset_ok(&ws.path, &["explain"])?;
  let out = stdout(&output);

  assert!(out.contains("src/App/App.csproj"));
  assert!(out.contains("1.2.3"));
  assert!(out.contains("src/Tool/Tool.csproj"));

  Ok(())
}

#[test]
fn test_explain_empty_workspace() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_verset_ok(&ws.path, &["explain"])?;
  assert!(stdout(&output).contains("No project files"));

  Ok(())
}

#[test]
fn test_explain_json_output() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_project("src/App", "App", "1.2.3")?;
  ws.add_unversioned_project("src/Pack", "Pack", true)?;

  let output = run_verset_ok(&ws.path, &["explain", "--json"])?;
  let rows: serde_json::Value = serde_json::from_str(&stdout(&output))?;

  let rows = rows.as_array().expect("array of rows");
  assert_eq!(rows.len(), 2);

  let app = rows
    .iter()
    .find(|r| r["path"] == "src/App/App.csproj")
    .expect("App row");
  assert_eq!(app["version"], "1.2.3");
  assert_eq!(app["versioned"], true);
  assert_eq!(app["packable"], false);

  let pack = rows
    .iter()
    .find(|r| r["path"] == "src/Pack/Pack.csproj")
    .expect("Pack row");
  assert_eq!(pack["version"], serde_json::Value::Null);
  assert_eq!(pack["versioned"], false);
  assert_eq!(pack["packable"], true);

  Ok(())
}
