//! Terminal and JSON output of a report.

use std::io::{self, Write};

use colored::{Color, Colorize};

use crate::app::report::{Report, TaskReport};
use crate::app::vault::{Vault, hyperlink};
use crate::error::AppResult;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which list a task line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Active,
    Inactive,
    Errored,
}

impl Section {
    const fn title(self) -> &'static str {
        match self {
            Self::Active => "Active tasks",
            Self::Inactive => "Inactive tasks",
            Self::Errored => "Tasks with syntax errors",
        }
    }

    const fn name_color(self) -> Color {
        match self {
            Self::Active => Color::Green,
            Self::Inactive => Color::BrightBlack,
            Self::Errored => Color::Red,
        }
    }
}

/// ## Summary
/// Writes the colored, human readable report.
///
/// Task names link to their notes when a vault is known. Empty sections are omitted.
///
/// ## Errors
/// Returns an error if writing to `out` fails.
pub fn render_text<W: Write>(out: &mut W, report: &Report, vault: Option<&Vault>) -> io::Result<()> {
    if let Some(vault) = vault {
        writeln!(out, "{}", format!("📓 Vault: {}", vault.name).cyan().bold())?;
    }

    render_section(out, Section::Active, &report.active, report, vault)?;
    render_section(out, Section::Inactive, &report.inactive, report, vault)?;
    render_section(out, Section::Errored, &report.errored, report, vault)?;
    Ok(())
}

/// ## Summary
/// Writes the report as pretty-printed JSON.
///
/// ## Errors
/// Returns an error if serialization or writing fails.
pub fn render_json<W: Write>(mut out: W, report: &Report) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}

fn render_section<W: Write>(
    out: &mut W,
    section: Section,
    tasks: &[TaskReport],
    report: &Report,
    vault: Option<&Vault>,
) -> io::Result<()> {
    if tasks.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n{}", format!("{}:", section.title()).yellow().bold())?;
    for task in tasks {
        render_task(out, section, task, report, vault)?;
    }
    Ok(())
}

fn render_task<W: Write>(
    out: &mut W,
    section: Section,
    task: &TaskReport,
    report: &Report,
    vault: Option<&Vault>,
) -> io::Result<()> {
    let name = match vault {
        Some(vault) => hyperlink(&vault.uri(&task.path), &task.name),
        None => task.name.clone(),
    };
    write!(out, "  - {} ({}", name.color(section.name_color()).bold(), task.rule)?;

    if let Some(duration) = &task.duration {
        write!(out, ", {duration}")?;
    }

    match section {
        Section::Active => {
            if let Some(due) = task.result.due_date() {
                let date = due.format(DATE_FORMAT).to_string();
                if due == report.today {
                    write!(out, "{}", format!(" ⚠️ {date}").red().bold())?;
                } else {
                    write!(out, "{}", format!(" → {date}").yellow())?;
                }
            }
            writeln!(out, ")")
        }
        Section::Inactive => {
            if let Some(next_start) = task.result.next_start() {
                let date = next_start.format(DATE_FORMAT).to_string();
                write!(out, "{}", format!(" → {date}").cyan())?;
            }
            writeln!(out, ")")
        }
        Section::Errored => {
            write!(out, ")")?;
            if let Some(message) = task.result.error_message() {
                write!(out, "{}", format!(" ❌ {message}").red())?;
            }
            writeln!(out)
        }
    }
}
