use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// The half-open interval `[start, start + span)` during which a task is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    start: NaiveDate,
    end: NaiveDateTime,
}

impl ActiveWindow {
    #[must_use]
    pub fn new(start: NaiveDate, span: TimeDelta) -> Self {
        Self {
            start,
            end: shift(start, span),
        }
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// First instant after the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Whether midnight of `today` lies inside the window.
    #[must_use]
    pub fn contains(&self, today: NaiveDate) -> bool {
        let today = midnight(today);
        midnight(self.start) <= today && today < self.end
    }

    /// Last calendar day of the window: `start + span - 1 day`.
    ///
    /// Spans shorter than a day are due on their start date.
    #[must_use]
    pub fn due_date(&self) -> NaiveDate {
        self.end
            .checked_sub_signed(TimeDelta::days(1))
            .map_or(self.start, |last| last.date())
            .max(self.start)
    }
}

/// Calendar day reached `span` after midnight of `date`, saturating at the calendar limit.
#[must_use]
pub fn reach(date: NaiveDate, span: TimeDelta) -> NaiveDate {
    shift(date, span).date()
}

/// Calendar day `span` before midnight of `date`, saturating at the calendar limit.
///
/// A window of length `span` that opens before this day has closed by `date`.
#[must_use]
pub fn lookback(date: NaiveDate, span: TimeDelta) -> NaiveDate {
    midnight(date)
        .checked_sub_signed(span)
        .map_or(NaiveDate::MIN, |instant| instant.date())
}

fn shift(date: NaiveDate, span: TimeDelta) -> NaiveDateTime {
    midnight(date)
        .checked_add_signed(span)
        .unwrap_or(NaiveDateTime::MAX)
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
