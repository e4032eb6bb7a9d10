//! Changeset records and their on-disk store
//!
//! A changeset is one pending change: a severity, a creation timestamp, a
//! human-authored description, and the list of affected projects. Pending
//! changesets live as individual files under the changeset directory until a
//! publish folds them into a release.

pub mod record;
pub mod store;

pub use record::{ChangeSeverity, ChangesetRecord, ParseFailure};
pub use store::ChangesetStore;
