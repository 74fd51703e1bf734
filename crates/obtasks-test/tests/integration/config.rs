//! Driving a scan from loaded configuration.

use std::fs;

use obtasks_test::app::app::report::build_report;
use obtasks_test::app::app::scan::collect_notes;
use obtasks_test::app::config::with_overrides;
use obtasks_test::component::config::Settings;
use obtasks_test::rfc::rfc::RRuleSource;

use super::helpers::{TestVault, date, names};

#[test_log::test(tokio::test)]
async fn config_file_selects_directory_and_extension() {
    let vault = TestVault::new();
    vault
        .task("water.markdown", &[("rrule", "FREQ=DAILY")])
        .task("ignored.md", &[("rrule", "FREQ=DAILY")]);

    let config_file = vault.root().join("config.yml");
    fs::write(
        &config_file,
        format!(
            "notes_dir: {}\nscan:\n  extension: .markdown\n  workers: 2\n",
            vault.notes_dir().display()
        ),
    )
    .expect("write config");

    let settings = Settings::load_from(&[config_file]).expect("load settings");
    let notes_dir = settings.require_notes_dir().expect("notes dir");
    let paths = collect_notes(notes_dir, settings.extension()).expect("collect notes");
    let report = build_report(
        paths,
        settings.extension(),
        date(2025, 9, 26),
        settings.scan.workers,
        RRuleSource::new(),
    )
    .await
    .expect("build report");

    assert_eq!(names(&report.active), vec!["water"]);
}

#[test_log::test]
fn command_line_directory_overrides_config() {
    let vault = TestVault::new();
    let config_file = vault.root().join("config.yaml");
    fs::write(&config_file, "notes_dir: /from/config\n").expect("write config");

    let settings = Settings::load_from(&[config_file]).expect("load settings");
    let settings = with_overrides(settings, Some(vault.notes_dir().to_path_buf()));

    assert_eq!(
        settings.require_notes_dir().expect("notes dir"),
        vault.notes_dir()
    );
}

#[test_log::test]
fn missing_notes_dir_is_explained() {
    let vault = TestVault::new();
    let settings = Settings::load_from(&[vault.root().join("absent.yml")]).expect("load settings");
    let settings = with_overrides(settings, None);

    if settings.notes_dir.is_none() {
        let message = settings
            .require_notes_dir()
            .expect_err("no notes dir")
            .to_string();
        assert!(message.contains("OBSIDIAN_NOTES_DIR"));
    }
}
