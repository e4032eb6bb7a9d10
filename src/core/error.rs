//! Error types for verset operations
//!
//! Every user-facing failure funnels through [`VersetError`] so `main` can
//! print a consistent message and map it to a process exit code.

use std::fmt;
use std::path::PathBuf;

/// Result alias used throughout the crate
pub type VersetResult<T> = Result<T, VersetError>;

/// Top-level error type
#[derive(Debug)]
pub enum VersetError {
  /// Underlying filesystem failure
  Io(std::io::Error),

  /// Configuration problems (verset.toml)
  Config(ConfigError),

  /// The changeset directory holds nothing to publish
  NoPendingChanges { changes_dir: PathBuf },

  /// Publish finished but one or more projects could not be updated
  ProjectsFailed { failed: usize },

  /// Anything else, with a preformatted message
  Message(String),
}

/// Configuration-specific errors
#[derive(Debug)]
pub enum ConfigError {
  /// verset.toml exists but does not parse
  Malformed { path: PathBuf, reason: String },
}

impl VersetError {
  /// Build a `Message` error from anything displayable
  pub fn message(msg: impl Into<String>) -> Self {
    VersetError::Message(msg.into())
  }

  /// Process exit code for this error
  ///
  /// Every reported failure maps to 1, including "nothing to publish".
  pub fn exit_code(&self) -> i32 {
    1
  }
}

impl fmt::Display for VersetError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VersetError::Io(err) => write!(f, "I/O error: {}", err),
      VersetError::Config(err) => write!(f, "{}", err),
      VersetError::NoPendingChanges { changes_dir } => {
        write!(f, "No changesets found in {}/", changes_dir.display())
      }
      VersetError::ProjectsFailed { failed } => {
        write!(f, "{} project(s) could not be updated", failed)
      }
      VersetError::Message(msg) => write!(f, "{}", msg),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Malformed { path, reason } => {
        write!(f, "Failed to parse {}: {}", path.display(), reason)
      }
    }
  }
}

impl std::error::Error for VersetError {}

impl From<std::io::Error> for VersetError {
  fn from(err: std::io::Error) -> Self {
    VersetError::Io(err)
  }
}

impl From<serde_json::Error> for VersetError {
  fn from(err: serde_json::Error) -> Self {
    VersetError::Message(format!("JSON serialization failed: {}", err))
  }
}

/// Print an error with contextual help where we have any
pub fn print_error(err: &VersetError) {
  eprintln!("❌ {}", err);

  match err {
    VersetError::NoPendingChanges { .. } => {
      eprintln!();
      eprintln!("Create one with:");
      eprintln!("  verset add --severity <patch|minor|major> --project <PATH>");
    }
    VersetError::Config(ConfigError::Malformed { .. }) => {
      eprintln!();
      eprintln!("Fix or remove the config file and re-run.");
    }
    _ => {}
  }
}

/// Context extension for converting foreign errors into [`VersetError`]
pub trait ResultExt<T> {
  /// Attach a static context message
  fn context(self, msg: impl Into<String>) -> VersetResult<T>;

  /// Attach a lazily built context message
  fn with_context<F>(self, f: F) -> VersetResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E: fmt::Display> ResultExt<T> for Result<T, E> {
  fn context(self, msg: impl Into<String>) -> VersetResult<T> {
    self.map_err(|e| VersetError::Message(format!("{}: {}", msg.into(), e)))
  }

  fn with_context<F>(self, f: F) -> VersetResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| VersetError::Message(format!("{}: {}", f(), e)))
  }
}
