//! spectrum-cli library root.
//!
//! Re-exports the command, config, and report modules so that integration
//! tests can exercise them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod report;
