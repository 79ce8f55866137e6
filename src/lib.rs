#![warn(missing_docs)] // Enforce documentation for all public items

//! `sigscan_lib` is the library behind the `sigscan` command line tool.
//!
//! It provides:
//! - Extracting parameter lists from Go resolver signatures (`scanner`, `pattern`)
//! - Turning a parameter list into an `args struct` declaration (`args_block`)
//! - Rewriting a resolver file in place (`edit`)
//! - Running the rewrite over a directory of resolver files (`driver`, `fs_utils`)
//! - Configuration (`config`) and error handling (`error`)
//!
//! ## Usage
//!
//! ```rust
//! let source = "func (r *Resolver) MenuDelete(ctx context.Context, id string) (*MenuDelete, error) {";
//! let params: Vec<&str> = sigscan_lib::extract(source).collect();
//! assert_eq!(params, vec!["id string"]);
//! ```
//!
//! Matching is a regex heuristic over the text, not a Go parser. Parameter
//! lists that contain parentheses or braces are not recognised.

/// Builds `args struct` declarations from parameter lists.
#[allow(missing_docs)]
pub mod args_block;
/// Command line argument definitions and handlers.
#[allow(missing_docs)]
pub mod cli;
/// Configuration management for the application.
pub mod config;
/// Shared constants used across the library.
pub mod constants;
/// Batch rewriting over a directory.
#[allow(missing_docs)]
pub mod driver;
/// Rewriting a single resolver file.
#[allow(missing_docs)]
pub mod edit;
/// Defines the core error types and Result alias.
#[allow(missing_docs)]
pub mod error;
/// Filesystem utilities.
pub mod fs_utils;
/// The signature pattern and its capture classes.
pub mod pattern;
/// Finding resolver signatures in source text.
#[allow(missing_docs)]
pub mod scanner;

pub use args_block::{ArgsBlock, ArgsField};
pub use config::{load_config, AppConfig};
pub use constants::*;
pub use driver::{run_driver, DriverOptions, DriverReport, FileOutcome, FileStatus};
pub use edit::{apply_rewrite, plan_rewrite, RewriteOptions, RewriteOutcome, RewritePlan};
pub use error::{Result, SigScanError};
pub use pattern::{CaptureClass, SignaturePattern};
pub use scanner::{extract, Extractor, SignatureMatch};
