//! Provides input/output functionality for structure file formats.
//!
//! Parsing and serialization are handled by `pdbtbx`; this module adds format
//! detection, a trait-based interface shared by both formats, and atomic output
//! so a failed conversion never leaves a partial file behind.

mod atomic;
pub mod error;
pub mod format;
pub mod mmcif;
pub mod pdb;
pub mod strictness;
pub mod traits;

pub use error::StructureIoError;
pub use format::StructureFormat;
pub use mmcif::MmcifFile;
pub use pdb::PdbFile;
pub use strictness::{ParseStrictnessError, Strictness};
pub use traits::StructureFile;
