use std::path::PathBuf;

pub use obtasks_core::config::*;

/// ## Summary
/// Applies command-line overrides on top of loaded settings.
///
/// A notes directory given on the command line wins over every config source.
#[must_use]
pub fn with_overrides(mut settings: Settings, notes_dir: Option<PathBuf>) -> Settings {
    if let Some(notes_dir) = notes_dir {
        settings.notes_dir = Some(notes_dir);
    }
    settings
}
