//! Publish command implementation
//!
//! Runs the publish pipeline and reports what happened per project. Exit
//! code is 1 whenever anything fell short: a missing project, a manifest
//! that would not rewrite, or nothing to publish at all.

use crate::core::config::VersetConfig;
use crate::core::error::{VersetError, VersetResult};
use crate::release::{ProjectStatus, PublishPipeline, PublishReport};
use std::env;

/// Run the publish command
pub fn run_publish(dry_run: bool, json: bool) -> VersetResult<()> {
  let root = env::current_dir()?;
  let config = VersetConfig::load_or_default(&root)?;

  let pipeline = PublishPipeline::new(&root, &config);
  let report = pipeline.run(dry_run)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_report(&report, dry_run);
  }

  if report.degraded() {
    return Err(VersetError::ProjectsFailed {
      failed: report.failed_count(),
    });
  }

  Ok(())
}

fn print_report(report: &PublishReport, dry_run: bool) {
  println!("📦 Publishing {} changeset(s)", report.changesets);
  println!("   Severity: {}", report.severity);
  println!("   Version:  {} -> {}", report.previous_version, report.new_version);
  println!();

  if report.projects.is_empty() {
    println!("   (no per-project updates)");
  }
  for outcome in &report.projects {
    match &outcome.status {
      ProjectStatus::Updated => println!("  ✅ Updated: {}", outcome.project),
      ProjectStatus::NotFound => println!("  ⚠️  Not found: {}", outcome.project),
      ProjectStatus::Failed { reason } => {
        println!("  ❌ Failed: {} ({})", outcome.project, reason)
      }
    }
  }
  println!();

  if dry_run {
    println!("🔍 Dry-run mode (no changes applied)");
  } else if report.degraded() {
    println!(
      "⚠️  Published version {} with {} failure(s)",
      report.new_version,
      report.failed_count()
    );
  } else {
    println!("✅ Published version {}", report.new_version);
  }
}
