//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

const AFTER_HELP: &str = "\
CONFIGURATION:
  Set the notes directory via:
  - the --notes-dir flag,
  - the OBSIDIAN_NOTES_DIR environment variable, or
  - a config file (config.yaml/config.yml) with a 'notes_dir' field in
    the current directory or ~/.config/obsidian-tasks/

FRONT MATTER FORMAT:
  Recurring tasks:
    ---
    rrule: FREQ=DAILY;COUNT=5
    duration: P1D
    dtstart: 2025-01-01
    ---

  One-time events:
    ---
    dtstart: 2025-10-18
    duration: P6D
    ---

DURATION FORMAT:
  ISO 8601 duration: P1D (1 day), P1W (1 week), PT2H (2 hours), etc.";

/// Reports which recurring tasks in an Obsidian vault are active today.
///
/// Scans markdown notes for tasks defined with iCal RRULE and DURATION semantics
/// in YAML front matter.
#[derive(Debug, Parser)]
#[command(name = "obsidian-tasks", version, after_long_help = AFTER_HELP)]
pub struct Cli {
    /// Directory to scan for task notes
    #[arg(long, value_name = "DIR")]
    pub notes_dir: Option<PathBuf>,

    /// Evaluate tasks as of this date instead of the current UTC date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
