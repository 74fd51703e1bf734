//! Finding task notes under the notes directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::app::frontmatter::{FrontMatter, parse_front_matter};
use crate::app::name::display_name;
use crate::error::{AppError, AppResult};

/// A note whose front matter defines a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedNote {
    pub path: PathBuf,
    pub name: String,
    pub front_matter: FrontMatter,
}

/// ## Summary
/// Lists every file under `root` with the given extension, in file name order.
///
/// ## Errors
/// Returns an error if a directory cannot be read during the walk.
pub fn collect_notes(root: &Path, extension: &str) -> AppResult<Vec<PathBuf>> {
    let mut notes = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            notes.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), count = notes.len(), "Collected notes");
    Ok(notes)
}

/// ## Summary
/// Reads a note and returns it if its front matter describes a task.
///
/// Notes without front matter, or whose front matter has neither a rule nor a
/// start date, yield `Ok(None)`.
///
/// ## Errors
/// Returns an error if the file cannot be read or its front matter is malformed.
pub fn read_note(path: &Path, extension: &str) -> AppResult<Option<ScannedNote>> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ReadNote {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(front_matter) = parse_front_matter(&content)? else {
        return Ok(None);
    };
    if !front_matter.definition().is_task() {
        return Ok(None);
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Some(ScannedNote {
        path: path.to_path_buf(),
        name: display_name(&file_name, extension),
        front_matter,
    }))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
