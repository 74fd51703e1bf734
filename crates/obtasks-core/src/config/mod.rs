use std::path::{Path, PathBuf};

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{APP_NAME, CONFIG_FILE_YAML, CONFIG_FILE_YML, ENV_PREFIX, NOTES_DIR_ENV};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub notes_dir: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Upper bound on concurrently evaluated notes.
    pub workers: usize,
    /// File extension (without the dot) of notes to scan.
    pub extension: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from the default config file locations and environment variables.
    ///
    /// Files are layered from lowest to highest priority: the user config directory
    /// (`~/.config/obsidian-tasks/`) and then the current directory. Environment variables
    /// prefixed with `OBSIDIAN_` override every file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_files())
    }

    /// ## Summary
    /// Loads configuration from the given files (lowest priority first) and environment variables.
    ///
    /// Missing files are skipped.
    ///
    /// ## Errors
    /// Returns an error if a present file cannot be parsed, or the merged
    /// configuration fails to deserialize or validate.
    pub fn load_from(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("scan.workers", 8)?
            .set_default("scan.extension", "md")?;

        for file in files {
            builder = builder.add_source(config::File::from(file.as_path()).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        tracing::debug!(
            files = ?files,
            notes_dir = ?settings.notes_dir,
            workers = settings.scan.workers,
            extension = %settings.scan.extension,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// ## Summary
    /// Checks invariants that deserialization alone cannot express.
    ///
    /// ## Errors
    /// Returns `ValidationError` if the worker count is zero or the extension is empty.
    pub fn validate(&self) -> CoreResult<()> {
        if self.scan.workers == 0 {
            return Err(CoreError::ValidationError(
                "scan.workers must be at least 1".to_string(),
            ));
        }
        if self.scan.extension.trim_start_matches('.').is_empty() {
            return Err(CoreError::ValidationError(
                "scan.extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// ## Summary
    /// Returns the configured notes directory.
    ///
    /// ## Errors
    /// Returns `ConfigError` if no notes directory has been configured.
    pub fn require_notes_dir(&self) -> CoreResult<&Path> {
        self.notes_dir.as_deref().ok_or_else(|| {
            CoreError::ConfigError(format!(
                "Notes directory not configured. Set {NOTES_DIR_ENV} environment variable or create {CONFIG_FILE_YAML} with notes_dir field"
            ))
        })
    }

    /// Returns the note extension without a leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.scan.extension.trim_start_matches('.')
    }
}

/// Config file candidates, lowest priority first.
#[must_use]
pub fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Some(config_dir) = dirs::home_dir().map(|home| home.join(".config").join(APP_NAME)) {
        files.push(config_dir.join(CONFIG_FILE_YML));
        files.push(config_dir.join(CONFIG_FILE_YAML));
    }

    files.push(PathBuf::from(CONFIG_FILE_YML));
    files.push(PathBuf::from(CONFIG_FILE_YAML));
    files
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and config files.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    Settings::load()
}
