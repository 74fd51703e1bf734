//! Activation engine.
//!
//! Decides whether a task is active on a given day. A recurring task is active
//! while today lies in the window `[occurrence, occurrence + duration)` of any of
//! its occurrences. A one-time task has a single window starting at its start date.
//!
//! Evaluation is a pure function of the definition and `today`: the wall clock is
//! never consulted here.

mod window;

use chrono::{Months, NaiveDate};
use obtasks_rfc::error::RfcError;
use obtasks_rfc::rfc::RecurrenceSource;
use serde::Serialize;

use crate::definition::{ResolvedDefinition, TaskDefinition, resolve};
use crate::error::ServiceError;

pub use window::{ActiveWindow, lookback, reach};

/// How far past today the next start of an inactive recurring task is searched for.
pub const LOOKAHEAD_MONTHS: u32 = 12;

/// Why a definition could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    DurationFormat,
    RuleParse,
}

/// Outcome of evaluating one task on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActivationResult {
    /// Today lies inside an active window, which closes after `due`.
    Active { due: NaiveDate },
    /// No window contains today. `next_start` is the next window to open, if one is known.
    Inactive { next_start: Option<NaiveDate> },
    /// The definition is broken.
    Error { kind: ErrorKind, message: String },
}

impl ActivationResult {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Active { due } => Some(*due),
            _ => None,
        }
    }

    #[must_use]
    pub const fn next_start(&self) -> Option<NaiveDate> {
        match self {
            Self::Inactive { next_start } => *next_start,
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<RfcError> for ActivationResult {
    fn from(err: RfcError) -> Self {
        let kind = match err {
            RfcError::DurationFormat(_) => ErrorKind::DurationFormat,
            RfcError::RuleParse(_) => ErrorKind::RuleParse,
        };
        Self::Error {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<ServiceError> for ActivationResult {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::RfcError(err) => err.into(),
        }
    }
}

/// Activation result together with what a report needs to label it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// The task has no recurrence rule.
    pub one_time: bool,
    pub result: ActivationResult,
}

/// ## Summary
/// Resolves a raw definition and evaluates it for `today`.
///
/// Resolution errors (a malformed duration) short-circuit to an `Error` result
/// without consulting the recurrence source.
#[must_use]
pub fn assess<S>(definition: &TaskDefinition, today: NaiveDate, source: &S) -> Assessment
where
    S: RecurrenceSource + ?Sized,
{
    let result = match resolve(definition, today) {
        Ok(resolved) => evaluate(&resolved, today, source),
        Err(err) => err.into(),
    };

    Assessment {
        one_time: definition.is_one_time(),
        result,
    }
}

/// ## Summary
/// Evaluates a resolved definition for `today`.
///
/// When several occurrence windows contain today, the earliest occurrence wins.
///
/// ## Side Effects
/// None beyond debug logging. The recurrence source is only read.
#[must_use]
pub fn evaluate<S>(definition: &ResolvedDefinition, today: NaiveDate, source: &S) -> ActivationResult
where
    S: RecurrenceSource + ?Sized,
{
    let result = match definition.rule() {
        Some(rule) => evaluate_recurring(rule, definition, today, source).unwrap_or_else(Into::into),
        None => evaluate_one_time(definition, today),
    };

    tracing::debug!(
        rule = definition.rule(),
        start = %definition.start(),
        duration_secs = definition.duration().num_seconds(),
        %today,
        ?result,
        "Evaluated task"
    );

    result
}

fn evaluate_recurring<S>(
    rule: &str,
    definition: &ResolvedDefinition,
    today: NaiveDate,
    source: &S,
) -> Result<ActivationResult, RfcError>
where
    S: RecurrenceSource + ?Sized,
{
    // Only occurrences within one duration of today can open a window covering it.
    // The rule stays anchored at its start so COUNT and INTERVAL keep their meaning.
    let occurrences = source.occurrences_between(
        rule,
        definition.start(),
        definition.start().max(lookback(today, definition.duration())),
        reach(today, definition.duration()),
    )?;

    let current = occurrences
        .into_iter()
        .map(|occurrence| ActiveWindow::new(occurrence, definition.duration()))
        .find(|window| window.contains(today));

    if let Some(window) = current {
        return Ok(ActivationResult::Active {
            due: window.due_date(),
        });
    }

    Ok(ActivationResult::Inactive {
        next_start: next_occurrence(rule, definition, today, source)?,
    })
}

/// Earliest occurrence strictly after `today`, within the lookahead horizon.
fn next_occurrence<S>(
    rule: &str,
    definition: &ResolvedDefinition,
    today: NaiveDate,
    source: &S,
) -> Result<Option<NaiveDate>, RfcError>
where
    S: RecurrenceSource + ?Sized,
{
    let Some(tomorrow) = today.succ_opt() else {
        return Ok(None);
    };
    let horizon = today
        .checked_add_months(Months::new(LOOKAHEAD_MONTHS))
        .unwrap_or(NaiveDate::MAX);

    Ok(source
        .occurrences_between(rule, definition.start(), tomorrow, horizon)?
        .into_iter()
        .find(|occurrence| *occurrence > today))
}

fn evaluate_one_time(definition: &ResolvedDefinition, today: NaiveDate) -> ActivationResult {
    let window = ActiveWindow::new(definition.start(), definition.duration());

    if window.contains(today) {
        ActivationResult::Active {
            due: window.due_date(),
        }
    } else {
        ActivationResult::Inactive {
            next_start: (definition.start() > today).then_some(definition.start()),
        }
    }
}
