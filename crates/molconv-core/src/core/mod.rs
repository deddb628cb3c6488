//! # Core Module
//!
//! The building blocks every conversion is assembled from.
//!
//! - **Chain Identifiers** ([`chains`]) - Bijective base-62 encoding and the
//!   compaction pass that squeezes arbitrary chain identifiers into the single
//!   character the legacy PDB format allows.
//! - **File I/O** ([`io`]) - Format detection, reading and atomically writing
//!   structures through `pdbtbx`.

pub mod chains;
pub mod io;
