//! Display names for notes.

use std::sync::LazyLock;

use regex::Regex;

/// One or more leading dates such as `2025-05-22 `, `2025_05_22_` or `2025.5.22-`.
#[expect(clippy::expect_used, reason = "The pattern is a literal")]
static DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}[-_.]\d{1,2}[-_.]\d{1,2}[\s_-]*)+").expect("valid date prefix pattern")
});

/// ## Summary
/// Turns a note's file name into a task name.
///
/// Strips leading date prefixes and the `.extension` suffix. Falls back to the bare
/// file stem when nothing but a date is left.
#[must_use]
pub fn display_name(file_name: &str, extension: &str) -> String {
    let stem = file_name
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(file_name);

    let cleaned = DATE_PREFIX.replace(stem, "");
    if cleaned.is_empty() {
        stem.to_string()
    } else {
        cleaned.into_owned()
    }
}
