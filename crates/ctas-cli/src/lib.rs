//! ctas-cli library root.
//!
//! Exposes the command-line definition, config handling and command
//! implementations so integration tests can exercise them without spawning
//! the binary.

pub mod cli;
pub mod commands;
pub mod config;
