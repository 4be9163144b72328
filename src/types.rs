use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};

/// A note as seen by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    /// Display title: the file name with its `.md` suffix removed.
    pub title: String,
    /// File name inside the notes directory, e.g. `project-ideas.md`.
    pub filename: String,
    /// Last-modified time reported by the filesystem.
    pub last_modified: DateTime<Utc>,
}

impl NoteEntry {
    /// Returns the modification time as ISO-8601 UTC with millisecond
    /// precision, e.g. `2026-10-17T09:30:00.123Z`.
    pub fn last_modified_iso(&self) -> String {
        self.last_modified
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Outcome of looking up a note by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The note exists; holds its raw markdown content.
    Found(String),
    /// No file exists for the title's slug.
    NotFound {
        /// The path that was checked.
        path: PathBuf,
    },
}
