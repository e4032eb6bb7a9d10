//! CLI commands for verset
//!
//! ## Authoring
//! - **add**: record a pending changeset (severity, projects, description)
//!
//! ## Publishing
//! - **publish**: fold all pending changesets into one version bump with
//!   changelog generation
//!
//! ## Inspection
//! - **explain**: table of discovered projects and their version status
//! - **validate**: fail when a packable project has no <Version> tag

pub mod add;
pub mod explain;
pub mod publish;
pub mod validate;

pub use add::run_add;
pub use explain::run_explain;
pub use publish::run_publish;
pub use validate::run_validate;
