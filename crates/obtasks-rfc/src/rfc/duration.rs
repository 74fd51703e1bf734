//! Task DURATION values.
//!
//! A subset of ISO 8601 durations: `P[nY][nM][nW][nD][T[nH][nM][nS]]`.
//! Components are summed into a flat span. Calendar units use fixed lengths
//! (a month is 30 days, a year is 365 days), so `P1M` is the same span no matter
//! which month it is applied to.

use chrono::TimeDelta;

use crate::error::{RfcError, RfcResult};

/// Span used when a task does not declare a duration.
pub const DEFAULT_DURATION_DAYS: i64 = 1;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Which side of the `T` designator a component sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Date,
    Time,
}

impl Section {
    /// Length in seconds of one `unit` within this section.
    const fn unit_seconds(self, unit: char) -> Option<i64> {
        match (self, unit) {
            (Self::Date, 'Y') => Some(365 * SECONDS_PER_DAY),
            (Self::Date, 'M') => Some(30 * SECONDS_PER_DAY),
            (Self::Date, 'W') => Some(7 * SECONDS_PER_DAY),
            (Self::Date, 'D') => Some(SECONDS_PER_DAY),
            (Self::Time, 'H') => Some(SECONDS_PER_HOUR),
            (Self::Time, 'M') => Some(SECONDS_PER_MINUTE),
            (Self::Time, 'S') => Some(1),
            _ => None,
        }
    }
}

/// Parses a task duration into a span.
///
/// An empty string yields the default of one day.
///
/// ## Errors
/// Returns `RfcError::DurationFormat` if the text does not start with `P`, names
/// an unknown unit, has a unit without a value (or a value without a unit),
/// overflows, or adds up to a zero-length span.
pub fn parse_duration(text: &str) -> RfcResult<TimeDelta> {
    if text.is_empty() {
        return Ok(TimeDelta::days(DEFAULT_DURATION_DAYS));
    }

    let Some(body) = text.strip_prefix('P') else {
        return Err(RfcError::DurationFormat(
            "duration must start with P".to_string(),
        ));
    };

    let (date_part, time_part) = match body.split_once('T') {
        Some((date_part, time_part)) => (date_part, time_part),
        None => (body, ""),
    };

    let total = sum_components(date_part, Section::Date)?
        .checked_add(sum_components(time_part, Section::Time)?)
        .ok_or_else(overflow)?;

    if total <= 0 {
        return Err(RfcError::DurationFormat(format!(
            "duration {text} is not greater than zero"
        )));
    }

    TimeDelta::try_seconds(total).ok_or_else(overflow)
}

/// Sums `<digits><unit>` pairs of one section into seconds.
fn sum_components(part: &str, section: Section) -> RfcResult<i64> {
    let mut total: i64 = 0;
    let mut digits = String::new();

    for c in part.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let unit_seconds = section
            .unit_seconds(c)
            .ok_or_else(|| RfcError::DurationFormat(format!("unknown unit {c}")))?;

        if digits.is_empty() {
            return Err(RfcError::DurationFormat(format!(
                "missing value before unit {c}"
            )));
        }

        let value = digits.parse::<i64>().map_err(|e| {
            RfcError::DurationFormat(format!("invalid value {digits}: {e}"))
        })?;
        digits.clear();

        total = value
            .checked_mul(unit_seconds)
            .and_then(|seconds| total.checked_add(seconds))
            .ok_or_else(overflow)?;
    }

    if !digits.is_empty() {
        return Err(RfcError::DurationFormat(format!(
            "missing unit after {digits}"
        )));
    }

    Ok(total)
}

fn overflow() -> RfcError {
    RfcError::DurationFormat("duration is too large".to_string())
}
