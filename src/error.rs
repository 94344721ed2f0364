//! Error types for the unimark library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unimark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during export and persistence.
///
/// The styling pipeline itself never fails; malformed or unrecognized
/// markup is stripped, not rejected. Errors come from the boundaries:
/// the system clipboard and the note store.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The system clipboard could not be opened.
    #[error("Clipboard access error: {0}")]
    ClipboardAccess(String),

    /// The clipboard rejected the write.
    #[error("Clipboard write error: {0}")]
    ClipboardWrite(String),

    /// The platform data directory could not be determined.
    #[error("Data directory not found")]
    StoreDir,

    /// The note file could not be read or written.
    #[error("Note store error at {}: {reason}", .path.display())]
    Store {
        /// Path of the note file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// A selection range that does not address the document markup.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}
