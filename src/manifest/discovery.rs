//! Project manifest discovery
//!
//! Recursively scans a source tree for project files (`*.csproj` by
//! default), reads each one, and records whether it carries a `<Version>`
//! marker and whether it is packable. Reads run in parallel; large trees get
//! a progress bar.

use crate::core::error::VersetResult;
use crate::manifest::update;
use crate::ui::progress::ScanProgress;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// How many files warrant drawing a progress bar during the scan
const PROGRESS_THRESHOLD: usize = 20;

/// One discovered project file
#[derive(Debug, Clone)]
pub struct ProjectFile {
  /// Absolute path of the manifest
  pub path: PathBuf,
  /// Declared version, when the manifest has a version marker
  pub declared_version: Option<String>,
  /// Whether the manifest carries a `<Version>` marker at all
  pub has_version: bool,
  /// Whether the project is packable (directly or via Directory.Build.props)
  pub packable: bool,
}

/// Find and inspect every project file under `root`, sorted by path
pub fn discover_projects(root: &Path, extension: &str) -> VersetResult<Vec<ProjectFile>> {
  let mut paths = Vec::new();
  collect_files(root, extension, &mut paths)?;
  paths.sort();

  let progress =
    (paths.len() >= PROGRESS_THRESHOLD).then(|| ScanProgress::new(paths.len(), "Scanning projects"));

  let projects = paths
    .into_par_iter()
    .map(|path| {
      let project = inspect(&path);
      if let Some(bar) = &progress {
        bar.inc();
      }
      project
    })
    .collect();

  Ok(projects)
}

fn inspect(path: &Path) -> ProjectFile {
  // unreadable manifests are reported as bare entries rather than failures;
  // validate and explain still want to list them
  let content = fs::read_to_string(path).unwrap_or_default();

  ProjectFile {
    declared_version: update::declared_version(&content).map(str::to_string),
    has_version: update::has_version_marker(&content),
    packable: is_packable(path, &content),
    path: path.to_path_buf(),
  }
}

fn collect_files(dir: &Path, extension: &str, out: &mut Vec<PathBuf>) -> VersetResult<()> {
  for entry in fs::read_dir(dir)? {
    let path = entry?.path();
    if path.is_dir() {
      collect_files(&path, extension, out)?;
    } else if path.extension().is_some_and(|ext| ext == extension) {
      out.push(path);
    }
  }
  Ok(())
}

/// Whether a project is packable
///
/// True when the manifest itself carries `<IsPackable>true</IsPackable>` or
/// `<PackAsTool>true</PackAsTool>`, or when any ancestor directory's
/// `Directory.Build.props` does.
pub fn is_packable(path: &Path, content: &str) -> bool {
  if has_packable_tag(content) {
    return true;
  }

  let mut dir = path.parent();
  while let Some(current) = dir {
    let props = current.join("Directory.Build.props");
    if props.is_file() {
      if let Ok(props_content) = fs::read_to_string(&props) {
        if has_packable_tag(&props_content) {
          return true;
        }
      }
    }
    dir = current.parent();
  }

  false
}

/// Case-insensitive check for a packability tag with a `true` value
fn has_packable_tag(content: &str) -> bool {
  let lower = content.to_ascii_lowercase();
  ["ispackable", "packastool"].iter().any(|tag| {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let mut from = 0;
    while let Some(start) = lower[from..].find(&open) {
      let value_start = from + start + open.len();
      let Some(end) = lower[value_start..].find(&close) else {
        return false;
      };
      if lower[value_start..value_start + end].trim() == "true" {
        return true;
      }
      from = value_start + end + close.len();
    }
    false
  })
}
