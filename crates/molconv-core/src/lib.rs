//! # molconv Core Library
//!
//! Conversion between mmCIF and PDB structure files, including parallel batch
//! conversion of whole directories.
//!
//! ## Architectural Philosophy
//!
//! Parsing and serialization of both formats are delegated to [`pdbtbx`]. The
//! library is layered the same way regardless of how thin each layer is:
//!
//! - **[`core`]: The Foundation.** Chain identifier compaction (the base-62
//!   encoder and the renaming pass) and the structure file I/O adapters.
//!
//! - **[`engine`]: Conversion Plumbing.** Configuration, error types shared by the
//!   workflows, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Single-file conversion and directory-wide
//!   batch conversion, each file handled as an independent unit of work.

pub mod core;
pub mod engine;
pub mod workflows;
