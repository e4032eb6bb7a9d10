//! Changeset record codec
//!
//! A changeset is a small Markdown file with a `---`-delimited header and a
//! free-text body:
//!
//! ```text
//! ---
//! changeset: minor
//! timestamp: 2026-08-06T12:34:56+00:00
//! projects:
//!   - src/App/App.csproj
//! ---
//! Add the thing.
//! ```
//!
//! Decoding is deliberately tolerant: severity tokens are case-insensitive
//! and surrounding whitespace is ignored. A file without the delimiter, with
//! an unknown severity, or with an unparseable timestamp fails to decode and
//! is skipped by the store rather than aborting a publish.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

const HEADER_DELIMITER: &str = "---";
const SEVERITY_KEY: &str = "changeset:";
const TIMESTAMP_KEY: &str = "timestamp:";
const PROJECTS_KEY: &str = "projects:";

/// Magnitude of a recorded change, ordered Patch < Minor < Major
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeSeverity {
  /// Bug fixes, small changes
  Patch,
  /// New features, backwards compatible
  Minor,
  /// Breaking changes
  Major,
}

impl ChangeSeverity {
  /// Parse a severity token, case-insensitively
  pub fn parse(token: &str) -> Option<Self> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("patch") {
      Some(Self::Patch)
    } else if token.eq_ignore_ascii_case("minor") {
      Some(Self::Minor)
    } else if token.eq_ignore_ascii_case("major") {
      Some(Self::Major)
    } else {
      None
    }
  }

  /// Lower-cased wire token
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Patch => "patch",
      Self::Minor => "minor",
      Self::Major => "major",
    }
  }
}

impl fmt::Display for ChangeSeverity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// One pending change awaiting publication
///
/// Immutable once parsed: publish consumes records, it never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangesetRecord {
  /// Backing file, absent for drafts not yet persisted
  pub source_path: Option<PathBuf>,
  /// Version bump this change requires
  pub severity: ChangeSeverity,
  /// Creation time, used only as a deterministic ordering key
  pub created_at: DateTime<Utc>,
  /// Human-authored description, trailing whitespace trimmed
  pub body: String,
  /// Affected project identifiers, order preserved
  pub projects: Vec<String>,
}

impl ChangesetRecord {
  /// Sortable file name derived from the creation timestamp
  pub fn file_name(&self) -> String {
    format!("{}.md", self.created_at.format("%Y%m%d-%H%M%S"))
  }
}

/// Why a changeset file failed to decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
  /// No `---`-delimited header block
  MissingHeader,
  /// Header has no `changeset:` line
  MissingSeverity,
  /// Severity token is not patch/minor/major
  UnknownSeverity(String),
  /// Header has no `timestamp:` line
  MissingTimestamp,
  /// Timestamp is not valid RFC 3339
  BadTimestamp(String),
}

impl fmt::Display for ParseFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParseFailure::MissingHeader => write!(f, "missing `---` header delimiter"),
      ParseFailure::MissingSeverity => write!(f, "missing changeset: line"),
      ParseFailure::UnknownSeverity(token) => write!(f, "unknown severity '{}'", token),
      ParseFailure::MissingTimestamp => write!(f, "missing timestamp: line"),
      ParseFailure::BadTimestamp(value) => write!(f, "unparseable timestamp '{}'", value),
    }
  }
}

impl std::error::Error for ParseFailure {}

/// Serialize a changeset to its file representation
pub fn encode(
  severity: ChangeSeverity,
  body: &str,
  projects: &[String],
  timestamp: DateTime<Utc>,
) -> String {
  let mut out = String::new();
  out.push_str(HEADER_DELIMITER);
  out.push('\n');
  out.push_str(&format!("{} {}\n", SEVERITY_KEY, severity));
  out.push_str(&format!("{} {}\n", TIMESTAMP_KEY, timestamp.to_rfc3339()));
  out.push_str(PROJECTS_KEY);
  out.push('\n');
  for project in projects {
    out.push_str(&format!("  - {}\n", project));
  }
  out.push_str(HEADER_DELIMITER);
  out.push('\n');
  out.push_str(body.trim_end());
  out.push('\n');
  out
}

/// Parse a changeset file back into a record
///
/// The returned record has no `source_path`; the store fills it in.
pub fn decode(text: &str) -> Result<ChangesetRecord, ParseFailure> {
  let mut lines = text.lines();

  match lines.next() {
    Some(first) if first.trim() == HEADER_DELIMITER => {}
    _ => return Err(ParseFailure::MissingHeader),
  }

  let mut severity = None;
  let mut created_at = None;
  let mut projects = Vec::new();
  let mut closed = false;

  for line in lines.by_ref() {
    let trimmed = line.trim();
    if trimmed == HEADER_DELIMITER {
      closed = true;
      break;
    }

    if let Some(token) = trimmed.strip_prefix(SEVERITY_KEY) {
      severity =
        Some(ChangeSeverity::parse(token).ok_or_else(|| {
          ParseFailure::UnknownSeverity(token.trim().to_string())
        })?);
    } else if let Some(value) = trimmed.strip_prefix(TIMESTAMP_KEY) {
      let value = value.trim();
      let parsed = DateTime::parse_from_rfc3339(value)
        .map_err(|_| ParseFailure::BadTimestamp(value.to_string()))?;
      created_at = Some(parsed.with_timezone(&Utc));
    } else if let Some(item) = trimmed.strip_prefix('-') {
      // list item inside the header, e.g. `  - src/App/App.csproj`
      let item = item.trim();
      if !item.is_empty() {
        projects.push(item.to_string());
      }
    }
    // the `projects:` label and anything unrecognized are ignored
  }

  if !closed {
    return Err(ParseFailure::MissingHeader);
  }

  let severity = severity.ok_or(ParseFailure::MissingSeverity)?;
  let created_at = created_at.ok_or(ParseFailure::MissingTimestamp)?;
  let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

  Ok(ChangesetRecord {
    source_path: None,
    severity,
    created_at,
    body,
    projects,
  })
}
