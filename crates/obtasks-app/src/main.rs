use std::io;

use chrono::Utc;
use clap::Parser;
use obtasks_app::app::cli::Cli;
use obtasks_app::app::render::{render_json, render_text};
use obtasks_app::app::report::build_report;
use obtasks_app::app::scan::collect_notes;
use obtasks_app::app::vault::detect_vault;
use obtasks_app::config::{load_config, with_overrides};
use obtasks_rfc::rfc::RRuleSource;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();

    let config = with_overrides(load_config()?, cli.notes_dir.clone());

    tracing::debug!(config = ?config, "Configuration loaded");

    let directive = if cli.verbose {
        "debug".to_string()
    } else {
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| config.logging.level.clone())
    };
    match EnvFilter::try_new(&directive) {
        Ok(filter) => {
            if let Err(e) = filter_handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter");
            }
        }
        Err(e) => {
            tracing::warn!(level = %directive, error = %e, "Invalid log level, keeping warn");
        }
    }

    let notes_dir = config.require_notes_dir()?.canonicalize()?;
    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    let extension = config.extension();

    tracing::info!(notes_dir = %notes_dir.display(), %today, "Scanning notes");

    let vault = detect_vault(&notes_dir);
    let paths = collect_notes(&notes_dir, extension)?;
    let report = build_report(paths, extension, today, config.scan.workers, RRuleSource::new()).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        render_json(&mut out, &report)?;
    } else {
        render_text(&mut out, &report, vault.as_ref())?;
    }

    Ok(())
}
