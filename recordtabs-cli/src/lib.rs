//! Command-line inspection of record display tabs
//!
//! The binary lives in `main.rs`; the modules are exposed so integration
//! tests can drive the commands directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod fixture;
pub mod logging;
