use pdbtbx::PDBError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructureIoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read structure from '{path}': {message}", path = path.display())]
    Read { path: PathBuf, message: String },

    #[error("Failed to write structure to '{path}': {message}", path = path.display())]
    Write { path: PathBuf, message: String },

    #[error("Path '{path}' is not valid UTF-8", path = path.display())]
    InvalidPath { path: PathBuf },

    #[error("Cannot determine structure format of '{path}'", path = path.display())]
    UnknownFormat { path: PathBuf },
}

/// Joins the diagnostics reported by `pdbtbx` into a single message.
pub(crate) fn join_messages(errors: &[PDBError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
