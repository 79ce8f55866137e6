// src/cli/mod.rs
//! Command line interface for `sigscan`.

pub mod commands;
pub mod extract;
pub mod rewrite;

pub use commands::{handle_command, CliArgs, Command};
