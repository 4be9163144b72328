//! On-disk notes store.
//!
//! Owns every read and write against the notes directory: a single flat
//! folder holding one `<slug>.md` file per note. Two titles with the same
//! slug address the same file, so the later save replaces the earlier one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::{NotesConfig, NOTE_EXTENSION};
use crate::errors::Result;
use crate::slug::slugify;
use crate::types::{NoteEntry, ReadOutcome};

/// Markdown notes stored as files in a single directory.
#[derive(Debug, Clone)]
pub struct NotesStore {
    dir: PathBuf,
}

impl NotesStore {
    /// Creates a store over the configured notes directory.
    ///
    /// The directory is not touched until the first operation.
    pub fn new(config: &NotesConfig) -> Self {
        Self {
            dir: config.notes_dir.clone(),
        }
    }

    /// Returns the notes directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path a title resolves to: `<dir>/<slug>.md`.
    pub fn note_path(&self, title: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", slugify(title), NOTE_EXTENSION))
    }

    /// Creates the notes directory and any missing parents.
    ///
    /// Succeeds if the directory already exists.
    pub async fn ensure_directory(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Writes `content` verbatim as the whole of the note's file, replacing
    /// any previous content. Returns the path written.
    pub async fn save_note(&self, title: &str, content: &str) -> Result<PathBuf> {
        self.ensure_directory().await?;
        let path = self.note_path(title);
        tokio::fs::write(&path, content).await?;
        info!(title, path = %path.display(), bytes = content.len(), "saved note");
        Ok(path)
    }

    /// Lists every `.md` entry in the notes directory.
    ///
    /// Entries come back in the order the filesystem enumerates them.
    pub async fn list_notes(&self) -> Result<Vec<NoteEntry>> {
        self.ensure_directory().await?;
        let suffix = format!(".{}", NOTE_EXTENSION);

        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut notes = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(filename) = file_name.to_str() else {
                debug!(name = ?file_name, "skipping non-UTF-8 directory entry");
                continue;
            };
            let Some(title) = filename.strip_suffix(suffix.as_str()) else {
                continue;
            };

            let modified = tokio::fs::metadata(entry.path()).await?.modified()?;
            notes.push(NoteEntry {
                title: title.to_string(),
                filename: filename.to_string(),
                last_modified: DateTime::<Utc>::from(modified),
            });
        }

        debug!(count = notes.len(), dir = %self.dir.display(), "listed notes");
        Ok(notes)
    }

    /// Reads a note by title.
    ///
    /// A missing file is reported as [`ReadOutcome::NotFound`] with the path
    /// that was checked; any other I/O failure is an error. Invalid UTF-8 is
    /// replaced with U+FFFD.
    pub async fn read_note(&self, title: &str) -> Result<ReadOutcome> {
        self.ensure_directory().await?;
        let path = self.note_path(title);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(ReadOutcome::Found(
                String::from_utf8_lossy(&bytes).into_owned(),
            )),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(title, path = %path.display(), "note not found");
                Ok(ReadOutcome::NotFound { path })
            }
            Err(e) => Err(e.into()),
        }
    }
}
