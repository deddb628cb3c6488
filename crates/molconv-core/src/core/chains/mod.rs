//! Chain identifier compaction.
//!
//! mmCIF allows chain identifiers of any length, while the fixed-column PDB
//! format has room for exactly one character. This module maps an arbitrary
//! set of identifiers onto single characters, keeping identifiers that are
//! already one character long and reporting every decision in a [`ChainMap`].

mod compaction;
mod encoder;
mod error;

pub use compaction::{ChainLabel, ChainMap, compact_structure, rename_chains};
pub use encoder::{CHAIN_ALPHABET, DEFAULT_CHAIN_BASE, int_to_chain};
pub use error::ChainIdError;
