mod changeset;
mod commands;
mod core;
mod manifest;
mod release;
mod ui;
mod utils;

use crate::core::error::print_error;
use clap::{Parser, Subcommand};

/// Changeset-driven version and changelog management for multi-project trees
#[derive(Parser)]
#[command(name = "verset")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Record a new changeset
  Add {
    /// Magnitude of the change: patch, minor, or major
    #[arg(short, long)]
    severity: String,
    /// Affected project manifest (repeatable)
    #[arg(short, long = "project", value_name = "PATH")]
    project: Vec<String>,
    /// Affect every eligible project
    #[arg(long)]
    all: bool,
    /// Change description (read from stdin when omitted)
    #[arg(short, long)]
    message: Option<String>,
  },

  /// Publish all pending changesets and bump the version
  Publish {
    /// Show what would happen without making changes
    #[arg(long)]
    dry_run: bool,
    /// Output the publish report in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Show a summary of all discovered projects
  Explain {
    /// Output the summary in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Check that packable projects carry a <Version> tag
  Validate {
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Add {
      severity,
      project,
      all,
      message,
    } => commands::run_add(severity, project, all, message),
    Commands::Publish { dry_run, json } => commands::run_publish(dry_run, json),
    Commands::Explain { json } => commands::run_explain(json),
    Commands::Validate { json } => commands::run_validate(json),
  };

  if let Err(err) = result {
    print_error(&err);
    std::process::exit(err.exit_code());
  }
}
