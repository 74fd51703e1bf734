//! Obsidian vault detection and `obsidian://` links.

use std::path::{Component, Path, PathBuf};

use obtasks_core::constants::{VAULT_MARKER_DIR, VAULT_URI_PREFIX};

/// An Obsidian vault: a directory containing `.obsidian/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    pub name: String,
    pub path: PathBuf,
}

impl Vault {
    /// ## Summary
    /// Builds the `obsidian://open` URI for a note inside this vault.
    ///
    /// The note is addressed by its path relative to the vault root, with `/`
    /// separators and without the `.md` suffix.
    #[must_use]
    pub fn uri(&self, file: &Path) -> String {
        let relative = file.strip_prefix(&self.path).unwrap_or(file);
        let joined = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        let note = joined.strip_suffix(".md").unwrap_or(&joined);

        format!(
            "{VAULT_URI_PREFIX}?vault={}&file={}",
            urlencoding::encode(&self.name),
            urlencoding::encode(note)
        )
    }
}

/// ## Summary
/// Finds the vault containing `notes_dir` by walking up to the nearest directory
/// that has a `.obsidian` folder.
///
/// ## Side Effects
/// Reads the file system.
#[must_use]
pub fn detect_vault(notes_dir: &Path) -> Option<Vault> {
    let start = notes_dir
        .canonicalize()
        .unwrap_or_else(|_| notes_dir.to_path_buf());

    let root = start
        .ancestors()
        .find(|dir| dir.join(VAULT_MARKER_DIR).is_dir())?;

    let name = root.file_name()?.to_string_lossy().into_owned();
    tracing::debug!(vault = %name, path = %root.display(), "Detected Obsidian vault");

    Some(Vault {
        name,
        path: root.to_path_buf(),
    })
}

/// Wraps `text` in an OSC 8 terminal hyperlink to `uri`.
#[must_use]
pub fn hyperlink(uri: &str, text: &str) -> String {
    format!("\x1b]8;;{uri}\x1b\\{text}\x1b]8;;\x1b\\")
}
