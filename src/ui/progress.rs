//! Progress indicators for long-running operations
//!
//! Uses `linya` for allocation-free progress bars. The scan bar is shared
//! across rayon workers, so drawing goes through a mutex.

use linya::{Bar, Progress};
use std::sync::{Arc, Mutex};

/// Thread-safe progress bar for parallel file scans
pub struct ScanProgress {
  progress: Arc<Mutex<Progress>>,
  bar: Bar,
}

impl ScanProgress {
  /// Create a bar for scanning `total` files
  pub fn new(total: usize, label: impl Into<String>) -> Self {
    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self {
      progress: Arc::new(Mutex::new(progress)),
      bar,
    }
  }

  /// Increment progress by 1 (callable from any worker)
  pub fn inc(&self) {
    if let Ok(mut progress) = self.progress.lock() {
      progress.inc_and_draw(&self.bar, 1);
    }
  }
}
