//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A temporary multi-project workspace
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  /// Create an empty workspace
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    // canonicalize so paths printed by the CLI match what tests expect,
    // even when the temp dir sits behind a symlink
    let path = root.path().canonicalize()?;
    Ok(Self { _root: root, path })
  }

  /// Add a project manifest with a <Version> tag; returns its relative path
  pub fn add_project(&self, rel_dir: &str, name: &str, version: &str) -> Result<String> {
    let rel = format!("{}/{}.csproj", rel_dir, name);
    let manifest = format!(
      "<Project Sdk=\"Microsoft.NET.Sdk\">\n\n  <PropertyGroup>\n    <TargetFramework>net8.0</TargetFramework>\n    <Version>{}</Version>\n  </PropertyGroup>\n\n</Project>\n",
      version
    );
    self.write(&rel, &manifest)?;
    Ok(rel)
  }

  /// Add a project manifest without a <Version> tag
  pub fn add_unversioned_project(&self, rel_dir: &str, name: &str, packable: bool) -> Result<String> {
    let rel = format!("{}/{}.csproj", rel_dir, name);
    let packable_tag = if packable {
      "    <IsPackable>true</IsPackable>\n"
    } else {
      ""
    };
    let manifest = format!(
      "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n{}  </PropertyGroup>\n</Project>\n",
      packable_tag
    );
    self.write(&rel, &manifest)?;
    Ok(rel)
  }

  /// Write a changeset file directly into the changeset directory
  pub fn write_changeset(
    &self,
    file_name: &str,
    severity: &str,
    timestamp: &str,
    projects: &[&str],
    body: &str,
  ) -> Result<()> {
    let mut content = String::new();
    content.push_str("---\n");
    content.push_str(&format!("changeset: {}\n", severity));
    content.push_str(&format!("timestamp: {}\n", timestamp));
    content.push_str("projects:\n");
    for project in projects {
      content.push_str(&format!("  - {}\n", project));
    }
    content.push_str("---\n");
    content.push_str(body);
    content.push('\n');

    self.write(&format!(".changes/{}", file_name), &content)
  }

  /// Seed the persisted current version
  pub fn set_version(&self, version: &str) -> Result<()> {
    self.write(".changes/.version", version)
  }

  /// Write a file under the workspace, creating parent directories
  pub fn write(&self, rel: &str, content: &str) -> Result<()> {
    let path = self.path.join(rel);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
  }

  /// Read a file under the workspace
  pub fn read(&self, rel: &str) -> Result<String> {
    std::fs::read_to_string(self.path.join(rel))
      .with_context(|| format!("Failed to read {}", rel))
  }

  /// Check if a file exists
  pub fn file_exists(&self, rel: &str) -> bool {
    self.path.join(rel).exists()
  }

  /// Count pending changeset files
  pub fn pending_changesets(&self) -> usize {
    let dir = self.path.join(".changes");
    let Ok(entries) = std::fs::read_dir(dir) else {
      return 0;
    };
    entries
      .filter_map(|e| e.ok())
      .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
      .count()
  }
}

/// Run the verset CLI; the caller asserts on the exit status
pub fn run_verset(cwd: &Path, args: &[&str]) -> Result<Output> {
  let verset_bin = env!("CARGO_BIN_EXE_verset");

  Command::new(verset_bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run verset")
}

/// Run the verset CLI and fail the test on a nonzero exit
pub fn run_verset_ok(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_verset(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "verset command failed: verset {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// stdout of a finished command as a string
pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

/// stderr of a finished command as a string
pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}
