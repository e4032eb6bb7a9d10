//! Project manifest handling
//!
//! - **discovery**: find project files and inspect their version/packability
//! - **update**: narrow text-splice of the `<Version>` span, everything else
//!   preserved byte-for-byte

pub mod discovery;
pub mod update;

pub use discovery::ProjectFile;
