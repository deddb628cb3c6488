//! # Workflows Module
//!
//! Top-level entry points of the library.
//!
//! - **Single File** ([`convert`]) - Read one structure, compact its chain
//!   identifiers when the target is PDB, and write it in the other format.
//! - **Batch** ([`batch`]) - Apply the single-file pipeline to every matching
//!   file of a directory in parallel. Each file succeeds or fails on its own.

pub mod batch;
pub mod convert;
