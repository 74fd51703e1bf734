//! RRULE expansion using the `rrule` crate.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

use crate::error::{RfcError, RfcResult};

/// Produces the dates on which a recurrence rule fires.
pub trait RecurrenceSource {
    /// ## Summary
    /// Returns the occurrence dates of `rule`, anchored at `reference_start`, that
    /// fall within `range_start..=range_end`.
    ///
    /// Dates are ascending and unique.
    ///
    /// ## Errors
    /// Returns `RfcError::RuleParse` if the rule text is malformed. A valid rule
    /// with no occurrences in range yields an empty list instead.
    fn occurrences_between(
        &self,
        rule: &str,
        reference_start: NaiveDate,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> RfcResult<Vec<NaiveDate>>;
}

/// [`RecurrenceSource`] backed by the `rrule` crate, evaluated in UTC.
#[derive(Debug, Clone, Copy)]
pub struct RRuleSource {
    max_instances: u16,
}

impl Default for RRuleSource {
    fn default() -> Self {
        Self {
            max_instances: u16::MAX,
        }
    }
}

impl RRuleSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps how many occurrences a single query may expand.
    #[must_use]
    pub const fn with_max_instances(mut self, max: u16) -> Self {
        self.max_instances = max;
        self
    }
}

impl RecurrenceSource for RRuleSource {
    fn occurrences_between(
        &self,
        rule: &str,
        reference_start: NaiveDate,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> RfcResult<Vec<NaiveDate>> {
        let rrule_set = parse_rule_set(rule, reference_start)?;

        if range_end < range_start {
            return Ok(Vec::new());
        }

        // Bounds sit just outside the requested days so the result does not
        // depend on whether the crate treats them as inclusive.
        let tz = rrule::Tz::Tz(chrono_tz::UTC);
        let after = (midnight_utc(range_start) - TimeDelta::seconds(1)).with_timezone(&tz);
        let before = range_end
            .succ_opt()
            .map_or(DateTime::<Utc>::MAX_UTC, midnight_utc)
            .with_timezone(&tz);

        let result = rrule_set.after(after).before(before).all(self.max_instances);

        if result.limited {
            tracing::warn!(
                rule,
                %range_start,
                %range_end,
                max_instances = self.max_instances,
                "Recurrence expansion hit the instance limit, later occurrences are ignored"
            );
        }

        let mut dates: Vec<NaiveDate> = result
            .dates
            .iter()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .filter(|date| (range_start..=range_end).contains(date))
            .collect();
        dates.dedup();

        Ok(dates)
    }
}

/// ## Summary
/// Parses `rule` into a recurrence set starting at midnight UTC of `reference_start`.
///
/// A leading `RRULE:` property name is accepted and ignored.
///
/// ## Errors
/// Returns `RfcError::RuleParse` if the `rrule` crate rejects the rule.
pub fn parse_rule_set(rule: &str, reference_start: NaiveDate) -> RfcResult<rrule::RRuleSet> {
    let rule = rule.trim();
    let rule = rule.strip_prefix("RRULE:").unwrap_or(rule);

    let rrule_string = format!(
        "DTSTART:{}\nRRULE:{}",
        reference_start.format("%Y%m%dT000000Z"),
        rule
    );

    rrule_string
        .parse::<rrule::RRuleSet>()
        .map_err(|e| RfcError::RuleParse(e.to_string()))
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
