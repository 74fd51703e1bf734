//! Evaluating scanned notes and grouping the results.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use futures::StreamExt;
use obtasks_rfc::rfc::RecurrenceSource;
use obtasks_service::activation::{ActivationResult, assess};
use serde::Serialize;

use crate::app::scan::{ScannedNote, read_note};
use crate::error::AppResult;

/// Evaluation of one task note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskReport {
    pub name: String,
    pub path: PathBuf,
    /// Rule text, or `ONCE` for one-time tasks.
    pub rule: String,
    pub duration: Option<String>,
    pub tags: Vec<String>,
    pub one_time: bool,
    #[serde(flatten)]
    pub result: ActivationResult,
}

impl TaskReport {
    /// Evaluates a scanned note for `today`.
    #[must_use]
    pub fn evaluate<S>(note: ScannedNote, today: NaiveDate, source: &S) -> Self
    where
        S: RecurrenceSource + ?Sized,
    {
        let definition = note.front_matter.definition();
        let assessment = assess(&definition, today, source);

        Self {
            name: note.name,
            path: note.path,
            rule: definition.rule_label().to_string(),
            duration: note.front_matter.duration.filter(|d| !d.is_empty()),
            tags: note.front_matter.tags,
            one_time: assessment.one_time,
            result: assessment.result,
        }
    }
}

/// Task reports grouped by outcome, each group ordered by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub today: NaiveDate,
    pub active: Vec<TaskReport>,
    pub inactive: Vec<TaskReport>,
    pub errored: Vec<TaskReport>,
}

impl Report {
    #[must_use]
    pub fn new(today: NaiveDate, mut tasks: Vec<TaskReport>) -> Self {
        tasks.sort_by(|a, b| a.path.cmp(&b.path));

        let mut report = Self {
            today,
            active: Vec::new(),
            inactive: Vec::new(),
            errored: Vec::new(),
        };
        for task in tasks {
            match task.result {
                ActivationResult::Active { .. } => report.active.push(task),
                ActivationResult::Inactive { .. } => report.inactive.push(task),
                ActivationResult::Error { .. } => report.errored.push(task),
            }
        }
        report
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.inactive.is_empty() && self.errored.is_empty()
    }
}

/// ## Summary
/// Reads and evaluates notes on up to `workers` blocking threads, then groups
/// the results deterministically.
///
/// Notes that cannot be read or whose front matter is malformed are logged and
/// skipped; they never affect other notes.
///
/// ## Errors
/// Returns an error if an evaluation thread panics.
pub async fn build_report<S>(
    paths: Vec<PathBuf>,
    extension: &str,
    today: NaiveDate,
    workers: usize,
    source: S,
) -> AppResult<Report>
where
    S: RecurrenceSource + Clone + Send + Sync + 'static,
{
    let extension: Arc<str> = Arc::from(extension);

    let outcomes: Vec<_> = futures::stream::iter(paths)
        .map(|path| {
            let extension = Arc::clone(&extension);
            let source = source.clone();
            tokio::task::spawn_blocking(move || evaluate_note(&path, &extension, today, &source))
        })
        .buffer_unordered(workers.max(1))
        .collect()
        .await;

    let mut tasks = Vec::new();
    for outcome in outcomes {
        if let Some(task) = outcome? {
            tasks.push(task);
        }
    }

    let report = Report::new(today, tasks);
    tracing::info!(
        %today,
        active = report.active.len(),
        inactive = report.inactive.len(),
        errored = report.errored.len(),
        "Evaluated task notes"
    );
    Ok(report)
}

fn evaluate_note<S>(path: &Path, extension: &str, today: NaiveDate, source: &S) -> Option<TaskReport>
where
    S: RecurrenceSource + ?Sized,
{
    match read_note(path, extension) {
        Ok(note) => note.map(|note| TaskReport::evaluate(note, today, source)),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Skipping note");
            None
        }
    }
}
