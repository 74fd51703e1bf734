//! Activation scenarios evaluated through real note files.

use obtasks_test::component::activation::{ActivationResult, ErrorKind};

use super::helpers::{TestVault, date, names};

#[test_log::test(tokio::test)]
async fn monthly_window_is_active_with_due_date() {
    let vault = TestVault::new();
    vault.task(
        "rent.md",
        &[("rrule", "FREQ=MONTHLY;BYMONTHDAY=1"), ("duration", "P3D"), ("dtstart", "2024-01-01")],
    );

    let report = vault.report(date(2025, 1, 2)).await;

    assert_eq!(names(&report.active), vec!["rent"]);
    assert_eq!(report.active[0].result.due_date(), Some(date(2025, 1, 3)));
}

#[test_log::test(tokio::test)]
async fn monthly_window_closed_reports_next_start() {
    let vault = TestVault::new();
    vault.task(
        "rent.md",
        &[("rrule", "FREQ=MONTHLY;BYMONTHDAY=1"), ("duration", "P3D"), ("dtstart", "2024-01-01")],
    );

    let report = vault.report(date(2025, 1, 5)).await;

    assert!(report.active.is_empty());
    assert_eq!(report.inactive[0].result.next_start(), Some(date(2025, 2, 1)));
}

#[test_log::test(tokio::test)]
async fn weekly_task_with_default_duration_is_active_on_its_day() {
    let vault = TestVault::new();
    vault.task(
        "review.md",
        &[("rrule", "FREQ=WEEKLY;BYDAY=FR"), ("dtstart", "2024-01-05")],
    );

    let friday = vault.report(date(2025, 9, 26)).await;
    let saturday = vault.report(date(2025, 9, 27)).await;

    assert_eq!(friday.active[0].result.due_date(), Some(date(2025, 9, 26)));
    assert_eq!(saturday.inactive[0].result.next_start(), Some(date(2025, 10, 3)));
}

#[test_log::test(tokio::test)]
async fn one_time_event_before_start() {
    let vault = TestVault::new();
    vault.task("trip.md", &[("dtstart", "2025-10-18"), ("duration", "P6D")]);

    let report = vault.report(date(2025, 9, 26)).await;

    let trip = &report.inactive[0];
    assert!(trip.one_time);
    assert_eq!(trip.rule, "ONCE");
    assert_eq!(trip.result.next_start(), Some(date(2025, 10, 18)));
}

#[test_log::test(tokio::test)]
async fn one_time_event_over_its_whole_life() {
    let vault = TestVault::new();
    vault.task("trip.md", &[("dtstart", "2025-10-18"), ("duration", "P6D")]);

    let during = vault.report(date(2025, 10, 23)).await;
    let after = vault.report(date(2025, 10, 24)).await;

    assert_eq!(during.active[0].result.due_date(), Some(date(2025, 10, 23)));
    assert_eq!(
        after.inactive[0].result,
        ActivationResult::Inactive { next_start: None }
    );
}

#[test_log::test(tokio::test)]
async fn malformed_duration_is_reported_as_error() {
    let vault = TestVault::new();
    vault.task("broken.md", &[("rrule", "FREQ=DAILY"), ("duration", "XYZ")]);

    let report = vault.report(date(2025, 9, 26)).await;

    assert!(report.active.is_empty());
    assert!(report.inactive.is_empty());
    assert!(matches!(
        report.errored[0].result,
        ActivationResult::Error {
            kind: ErrorKind::DurationFormat,
            ..
        }
    ));
}

#[test_log::test(tokio::test)]
async fn malformed_rule_is_reported_as_error() {
    let vault = TestVault::new();
    vault.task("bogus.md", &[("rrule", "FREQ=SOMETIMES"), ("dtstart", "2025-01-01")]);

    let report = vault.report(date(2025, 9, 26)).await;

    assert!(matches!(
        report.errored[0].result,
        ActivationResult::Error {
            kind: ErrorKind::RuleParse,
            ..
        }
    ));
}

#[test_log::test(tokio::test)]
async fn last_days_of_month_window() {
    let vault = TestVault::new();
    vault.task(
        "close-books.md",
        &[("rrule", "FREQ=MONTHLY;BYMONTHDAY=-5"), ("duration", "P5D"), ("dtstart", "2024-01-26")],
    );

    let report = vault.report(date(2025, 9, 28)).await;

    assert_eq!(report.active[0].result.due_date(), Some(date(2025, 9, 30)));
}

#[test_log::test(tokio::test)]
async fn window_end_is_excluded() {
    let vault = TestVault::new();
    vault.task(
        "rent.md",
        &[("rrule", "FREQ=MONTHLY;BYMONTHDAY=1"), ("duration", "P3D"), ("dtstart", "2024-01-01")],
    );

    let first_day = vault.report(date(2025, 3, 1)).await;
    let end = vault.report(date(2025, 3, 4)).await;

    assert_eq!(first_day.active.len(), 1);
    assert_eq!(end.inactive[0].result.next_start(), Some(date(2025, 4, 1)));
}

#[test_log::test(tokio::test)]
async fn exhausted_rule_has_no_next_start() {
    let vault = TestVault::new();
    vault.task(
        "course.md",
        &[("rrule", "FREQ=DAILY;COUNT=5"), ("dtstart", "2025-01-01")],
    );

    let report = vault.report(date(2025, 9, 26)).await;

    assert_eq!(
        report.inactive[0].result,
        ActivationResult::Inactive { next_start: None }
    );
}

#[test_log::test(tokio::test)]
async fn unparseable_start_falls_back_to_a_year_ago() {
    let vault = TestVault::new();
    vault.task("water.md", &[("rrule", "FREQ=DAILY"), ("dtstart", "someday")]);

    let report = vault.report(date(2025, 9, 26)).await;

    assert_eq!(report.active[0].result.due_date(), Some(date(2025, 9, 26)));
}
