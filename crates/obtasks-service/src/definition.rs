//! Task definitions as written in notes, and their resolved form.

use chrono::{NaiveDate, TimeDelta};
use obtasks_core::constants::ONE_TIME_LABEL;
use obtasks_rfc::rfc::{default_start, parse_duration, resolve_start};
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;

/// Raw task fields, exactly as they appear in a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// RRULE text without the `RRULE:` property name, e.g. `FREQ=WEEKLY;BYDAY=FR`.
    pub rule: Option<String>,
    /// ISO 8601 style duration, e.g. `P3D`.
    pub duration: Option<String>,
    /// Start date, e.g. `2025-01-01`.
    pub start: Option<String>,
}

impl TaskDefinition {
    #[must_use]
    pub fn new(rule: Option<String>, duration: Option<String>, start: Option<String>) -> Self {
        Self {
            rule,
            duration,
            start,
        }
    }

    /// Non-blank rule text, if any.
    #[must_use]
    pub fn rule(&self) -> Option<&str> {
        self.rule
            .as_deref()
            .map(str::trim)
            .filter(|rule| !rule.is_empty())
    }

    /// Whether this definition has no recurrence rule.
    #[must_use]
    pub fn is_one_time(&self) -> bool {
        self.rule().is_none()
    }

    /// Whether the note describes a task at all: recurring, or one-time with a start.
    #[must_use]
    pub fn is_task(&self) -> bool {
        self.rule().is_some()
            || self
                .start
                .as_deref()
                .is_some_and(|start| !start.trim().is_empty())
    }

    /// Rule text for display, or the one-time label.
    #[must_use]
    pub fn rule_label(&self) -> &str {
        self.rule().unwrap_or(ONE_TIME_LABEL)
    }
}

/// A definition with defaults applied and every field parsed.
///
/// `duration` is always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDefinition {
    rule: Option<String>,
    duration: TimeDelta,
    start: NaiveDate,
}

impl ResolvedDefinition {
    /// Builds a resolved definition from already parsed parts.
    ///
    /// Returns `None` if `duration` is not positive.
    #[must_use]
    pub fn new(rule: Option<String>, duration: TimeDelta, start: NaiveDate) -> Option<Self> {
        (duration > TimeDelta::zero()).then(|| Self {
            rule: rule
                .map(|rule| rule.trim().to_string())
                .filter(|rule| !rule.is_empty()),
            duration,
            start,
        })
    }

    #[must_use]
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    #[must_use]
    pub const fn duration(&self) -> TimeDelta {
        self.duration
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn is_one_time(&self) -> bool {
        self.rule.is_none()
    }
}

/// ## Summary
/// Applies defaults to a raw definition.
///
/// A missing duration means one day. A missing or unparseable start falls back to one
/// year before `today`.
///
/// ## Errors
/// Returns an error if the duration text is malformed. Rule text is not validated here.
pub fn resolve(definition: &TaskDefinition, today: NaiveDate) -> ServiceResult<ResolvedDefinition> {
    let duration = parse_duration(definition.duration.as_deref().unwrap_or_default())?;
    let start = resolve_start(
        definition.start.as_deref().unwrap_or_default(),
        default_start(today),
    );

    Ok(ResolvedDefinition {
        rule: definition.rule().map(str::to_string),
        duration,
        start,
    })
}
