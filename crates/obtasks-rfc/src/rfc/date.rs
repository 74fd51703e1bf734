//! Task start dates (`dtstart`).
//!
//! Start dates are compared at day granularity in UTC, so every accepted layout
//! is reduced to a calendar date. Unparseable text is never an error: callers
//! fall back to a default start instead.

use chrono::{Months, NaiveDate, NaiveDateTime};

/// How a layout is parsed before truncation to a date.
#[derive(Debug, Clone, Copy)]
enum Layout {
    Date(&'static str),
    DateTime(&'static str),
}

/// Accepted layouts, in priority order. The first one that parses wins.
const START_LAYOUTS: [Layout; 4] = [
    // 2025-01-31
    Layout::Date("%Y-%m-%d"),
    // 2025-01-31T08:30:00Z
    Layout::DateTime("%Y-%m-%dT%H:%M:%SZ"),
    // 2025-01-31T08:30:00
    Layout::DateTime("%Y-%m-%dT%H:%M:%S"),
    // 20250131T000000Z
    Layout::Date("%Y%m%dT000000Z"),
];

impl Layout {
    fn parse(self, text: &str) -> Option<NaiveDate> {
        match self {
            Self::Date(format) => NaiveDate::parse_from_str(text, format).ok(),
            Self::DateTime(format) => NaiveDateTime::parse_from_str(text, format)
                .ok()
                .map(|dt| dt.date()),
        }
    }
}

/// Parses a start date, truncated to its UTC calendar day.
///
/// Returns `None` for empty text or text matching none of the accepted layouts.
#[must_use]
pub fn parse_start_date(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    START_LAYOUTS.iter().find_map(|layout| layout.parse(text))
}

/// ## Summary
/// Resolves a start date, returning `fallback` when the text is empty or unparseable.
///
/// ## Side Effects
/// Logs at `info` level when non-empty text is replaced by the fallback.
#[must_use]
pub fn resolve_start(text: &str, fallback: NaiveDate) -> NaiveDate {
    if text.is_empty() {
        return fallback;
    }

    parse_start_date(text).unwrap_or_else(|| {
        tracing::info!(dtstart = %text, %fallback, "Unrecognized start date, using fallback");
        fallback
    })
}

/// Default start for tasks without a usable `dtstart`: one calendar year before `today`.
#[must_use]
pub fn default_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN)
}
