//! Small path helpers shared across commands

use std::path::Path;

/// Render a path relative to `root` for display, falling back to the full
/// path when it lives elsewhere
pub fn display_rel(path: &Path, root: &Path) -> String {
  path
    .strip_prefix(root)
    .unwrap_or(path)
    .to_string_lossy()
    .into_owned()
}
