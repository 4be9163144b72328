use std::path::PathBuf;

use crate::errors::{NotesError, Result};

/// Name of the folder, inside the user's home directory, that holds all notes.
pub const NOTES_DIR_NAME: &str = "dev-notes";

/// File extension used for every note on disk.
pub const NOTE_EXTENSION: &str = "md";

/// Configuration for the notes store.
///
/// The notes location is resolved once at startup and handed to the store,
/// so tests can point it at a temporary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Flat directory holding one `<slug>.md` file per note.
    pub notes_dir: PathBuf,
}

impl NotesConfig {
    /// Builds the default configuration rooted at `~/dev-notes`.
    pub fn from_home() -> Result<Self> {
        Ok(Self {
            notes_dir: default_notes_dir()?,
        })
    }

    /// Builds a configuration using an explicit notes directory.
    pub fn with_notes_dir(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
        }
    }
}

/// Returns `<home>/dev-notes` for the invoking user.
pub fn default_notes_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(NOTES_DIR_NAME))
        .ok_or_else(|| NotesError::Config {
            message: "could not determine the home directory".to_string(),
        })
}
