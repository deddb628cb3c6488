//! # Engine Module
//!
//! Shared plumbing for the conversion workflows.
//!
//! - **Configuration** ([`config`]) - Conversion direction and parser/writer strictness
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for batch runs
//! - **Error Handling** ([`error`]) - The error type every workflow returns

pub mod config;
pub mod error;
pub mod progress;
