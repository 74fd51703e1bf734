//! Scanning, grouping and rendering a whole notes directory.

use obtasks_test::app::app::render::render_json;

use super::helpers::{TestVault, date, names};

fn sample_vault() -> TestVault {
    let vault = TestVault::obsidian("Brain");
    vault
        .task(
            "2025-01-03 Weekly review.md",
            &[("rrule", "FREQ=WEEKLY;BYDAY=FR"), ("dtstart", "2024-01-05")],
        )
        .task(
            "Home/Pay rent.md",
            &[("rrule", "FREQ=MONTHLY;BYMONTHDAY=20"), ("duration", "P10D"), ("dtstart", "2024-01-20")],
        )
        .task("Trip.md", &[("dtstart", "2025-10-18"), ("duration", "P6D")])
        .task("Broken.md", &[("rrule", "FREQ=DAILY"), ("duration", "XYZ")])
        .task("Idea.md", &[("tags", "[someday]")])
        .raw("Journal.md", "# No front matter\n")
        .raw("attachment.txt", "---\nrrule: FREQ=DAILY\n---\n");
    vault
}

#[test_log::test(tokio::test)]
async fn groups_only_task_notes() {
    let vault = sample_vault();

    let report = vault.report(date(2025, 9, 26)).await;

    assert_eq!(names(&report.active), vec!["Weekly review", "Pay rent"]);
    assert_eq!(names(&report.inactive), vec!["Trip"]);
    assert_eq!(names(&report.errored), vec!["Broken"]);
}

#[test_log::test(tokio::test)]
async fn malformed_front_matter_is_skipped() {
    let vault = TestVault::new();
    vault
        .task("good.md", &[("rrule", "FREQ=DAILY")])
        .raw("unterminated.md", "---\nrrule: FREQ=DAILY\n")
        .raw("invalid.md", "---\nrrule: [oops\n---\n");

    let report = vault.report(date(2025, 9, 26)).await;

    assert_eq!(names(&report.active), vec!["good"]);
    assert!(report.errored.is_empty());
}

#[test_log::test(tokio::test)]
async fn renders_text_report_with_vault_links() {
    let vault = sample_vault();

    let text = vault.render(date(2025, 9, 26)).await;

    assert!(text.starts_with("📓 Vault: Brain\n"));
    assert!(text.contains("\nActive tasks:\n"));
    assert!(text.contains("obsidian://open?vault=Brain&file=Tasks%2FHome%2FPay%20rent"));
    assert!(text.contains("(FREQ=MONTHLY;BYMONTHDAY=20, P10D → 2025-09-29)"));
    assert!(text.contains("(FREQ=WEEKLY;BYDAY=FR ⚠️ 2025-09-26)"));
    assert!(text.contains("(ONCE, P6D → 2025-10-18)"));
    assert!(text.contains("(FREQ=DAILY, XYZ) ❌ duration parsing error"));
}

#[test_log::test(tokio::test)]
async fn renders_without_vault() {
    let vault = TestVault::new();
    vault.task("water.md", &[("rrule", "FREQ=DAILY")]);

    let text = vault.render(date(2025, 9, 26)).await;

    assert_eq!(text, "\nActive tasks:\n  - water (FREQ=DAILY ⚠️ 2025-09-26)\n");
}

#[test_log::test(tokio::test)]
async fn renders_json_report() {
    let vault = sample_vault();
    let report = vault.report(date(2025, 9, 26)).await;

    let mut out = Vec::new();
    render_json(&mut out, &report).expect("render json");
    let json: serde_json::Value = serde_json::from_slice(&out).expect("valid json");

    assert_eq!(json["today"], "2025-09-26");
    assert_eq!(json["active"][1]["status"], "active");
    assert_eq!(json["active"][1]["due"], "2025-09-29");
    assert_eq!(json["inactive"][0]["next_start"], "2025-10-18");
    assert_eq!(json["errored"][0]["kind"], "duration_format");
}

#[test_log::test(tokio::test)]
async fn empty_directory_renders_nothing() {
    let vault = TestVault::new();

    let report = vault.report(date(2025, 9, 26)).await;

    assert!(report.is_empty());
    assert_eq!(vault.render(date(2025, 9, 26)).await, "");
}
