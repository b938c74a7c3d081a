//! Error types and handling infrastructure for bookconnect.
//!
//! The library reports failures through [`BookError`], built with `thiserror`. The binary
//! layers `anyhow` on top for context at the process boundary.
//!
//! Catalog integrity violations (unknown author or genre, duplicate ids) are never retried
//! or swallowed: they mean the catalog document is corrupt and are handed back to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for bookconnect operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A paginator operation ran before any result set was adopted
    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    /// A book references an author id missing from the author table
    #[error("Book {book_id} references unknown author {author_id}")]
    MissingAuthor { book_id: String, author_id: String },

    /// A book references a genre id missing from the genre table
    #[error("Book {book_id} references unknown genre {genre_id}")]
    MissingGenre { book_id: String, genre_id: String },

    /// Two books in the catalog share an id
    #[error("Duplicate book id in catalog: {id}")]
    DuplicateBook { id: String },

    /// A book lists no genres at all
    #[error("Book {book_id} has no genres")]
    EmptyGenres { book_id: String },

    /// Catalog document could not be decoded
    #[error("Catalog parse failed: {message}")]
    CatalogParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// File system related errors (permission denied, read failure, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments or option values
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for bookconnect operations.
pub type Result<T> = std::result::Result<T, BookError>;

impl BookError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidState error with a descriptive message
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    pub fn missing_author(book_id: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self::MissingAuthor {
            book_id: book_id.into(),
            author_id: author_id.into(),
        }
    }

    pub fn missing_genre(book_id: impl Into<String>, genre_id: impl Into<String>) -> Self {
        Self::MissingGenre {
            book_id: book_id.into(),
            genre_id: genre_id.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// True for errors that mean the catalog document itself is inconsistent
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            Self::MissingAuthor { .. }
                | Self::MissingGenre { .. }
                | Self::DuplicateBook { .. }
                | Self::EmptyGenres { .. }
        )
    }
}

// Automatic conversion from io::Error to BookError
impl From<std::io::Error> for BookError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        Self::CatalogParse {
            message: format!("line {}, column {}", err.line(), err.column()),
            source: err,
        }
    }
}
