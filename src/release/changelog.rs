//! Changelog document writer
//!
//! Changelogs are append-only Markdown: each publish adds one `## <version>`
//! section at the end, after the existing content. Sections are never
//! reordered or rewritten.

use crate::core::error::{ResultExt, VersetResult};
use semver::Version;
use std::fs;
use std::path::Path;

/// Append a version section to the changelog at `path`, creating it if absent
///
/// Existing content is normalized to end in a single newline, then a blank
/// separator line, the `## <version>` heading, a blank line, and the trimmed
/// body follow. Call at most once per document per publish.
pub fn append(path: &Path, version: &Version, body: &str) -> VersetResult<()> {
  let existing = if path.is_file() {
    fs::read_to_string(path)
      .with_context(|| format!("Failed to read changelog {}", path.display()))?
  } else {
    String::new()
  };

  let mut out = existing;
  if !out.is_empty() {
    while out.ends_with('\n') {
      out.pop();
    }
    out.push_str("\n\n");
  }
  out.push_str(&format!("## {}\n\n{}\n", version, body.trim_end()));

  fs::write(path, out)
    .with_context(|| format!("Failed to write changelog {}", path.display()))?;

  Ok(())
}
