pub mod date;
pub mod duration;
pub mod recurrence;

pub use date::{default_start, parse_start_date, resolve_start};
pub use duration::{DEFAULT_DURATION_DAYS, parse_duration};
pub use recurrence::{RRuleSource, RecurrenceSource};
