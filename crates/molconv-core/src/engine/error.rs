use crate::core::chains::ChainIdError;
use crate::core::io::StructureIoError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    ChainId(#[from] ChainIdError),

    #[error(transparent)]
    Structure(#[from] StructureIoError),

    #[error("Input '{path}' does not exist", path = path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input '{path}' is not a regular file", path = path.display())]
    NotAFile { path: PathBuf },

    #[error("Input '{path}' is not a directory", path = path.display())]
    NotADirectory { path: PathBuf },

    #[error("No atoms found in '{path}'", path = path.display())]
    EmptyStructure { path: PathBuf },

    #[error("Cannot derive an output file name from '{path}'", path = path.display())]
    NoFileStem { path: PathBuf },

    #[error("I/O error on '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConversionError {
    /// True if the structure has more chains than single-character
    /// identifiers exist.
    pub fn is_out_of_chains(&self) -> bool {
        matches!(self, ConversionError::ChainId(ChainIdError::OutOfChains { .. }))
    }
}
