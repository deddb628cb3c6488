use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChainIdError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "Too many chains to represent in PDB format: all {available} single-character identifiers are taken"
    )]
    OutOfChains { available: usize },

    #[error("Chain identifier '{id}' was rejected by the structure")]
    Rejected { id: String },
}
