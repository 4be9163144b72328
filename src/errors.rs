use thiserror::Error;

/// Errors that can occur while serving note operations.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid params: {message}")]
    InvalidParams { message: String },

    #[error("unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `NotesError`.
pub type Result<T> = std::result::Result<T, NotesError>;
