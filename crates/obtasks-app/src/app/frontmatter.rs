//! YAML front matter of a note.
//!
//! Front matter is the block between a leading `---` line and the next `---` line:
//!
//! ```text
//! ---
//! rrule: FREQ=WEEKLY;BYDAY=FR
//! duration: P1D
//! dtstart: 2025-01-03
//! ---
//! ```

use obtasks_service::definition::TaskDefinition;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

const DELIMITER: &str = "---";

/// Task fields recognized in front matter. Other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    pub rrule: Option<String>,
    pub duration: Option<String>,
    pub dtstart: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FrontMatter {
    #[must_use]
    pub fn definition(&self) -> TaskDefinition {
        TaskDefinition::new(
            self.rrule.clone(),
            self.duration.clone(),
            self.dtstart.clone(),
        )
    }
}

/// ## Summary
/// Extracts and decodes the front matter of a note.
///
/// Returns `Ok(None)` when the note does not start with a `---` line.
///
/// ## Errors
/// Returns an error if the front matter block is never closed or is not valid YAML.
pub fn parse_front_matter(content: &str) -> AppResult<Option<FrontMatter>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines();

    if lines.next().map(str::trim_end) != Some(DELIMITER) {
        return Ok(None);
    }

    let mut yaml = String::new();
    let mut closed = false;
    for line in lines {
        if line.trim_end() == DELIMITER {
            closed = true;
            break;
        }
        yaml.push_str(line);
        yaml.push('\n');
    }

    if !closed {
        return Err(AppError::FrontMatter(
            "front matter is not closed by a --- line".to_string(),
        ));
    }

    if yaml.trim().is_empty() {
        return Ok(Some(FrontMatter::default()));
    }

    Ok(Some(serde_yaml::from_str(&yaml)?))
}
