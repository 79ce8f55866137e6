use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::extract::{handle_extract, ExtractArgs};
use crate::cli::rewrite::{handle_rewrite, RewriteArgs};
use crate::config::AppConfig;
use crate::constants::CONFIG_PATH_ENV_VAR;
use crate::pattern::{CaptureClass, SignaturePattern};
use crate::scanner::Extractor;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract and rewrite Go resolver signatures", long_about = None)]
pub struct CliArgs {
    /// Path to a config.toml to use instead of the default location.
    /// Falls back to SIGSCAN_CONFIG_PATH when the flag is not given.
    #[arg(long, global = true, env = CONFIG_PATH_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Override the receiver prefix a signature must start with.
    #[arg(long, global = true)]
    pub receiver_prefix: Option<String>,

    /// Only capture parameter lists made of '.', '[' and ']' (extract only;
    /// rewrite rejects it).
    #[arg(long, global = true, default_value_t = false)]
    pub narrow: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the parameter list of every resolver signature, one per line.
    Extract(ExtractArgs),
    /// Replace the first resolver's parameters with an args struct in each resolver file.
    Rewrite(RewriteArgs),
}

/// Pattern from config with command line overrides applied.
pub fn effective_pattern(args: &CliArgs, config: &AppConfig) -> SignaturePattern {
    let mut pattern = config.pattern.clone();
    if let Some(prefix) = &args.receiver_prefix {
        pattern.receiver_prefix = prefix.clone();
    }
    if args.narrow {
        pattern.capture_class = CaptureClass::Narrow;
    }
    pattern
}

/// Dispatches the parsed command.
pub fn handle_command(args: CliArgs, config: &AppConfig) -> Result<()> {
    let pattern = effective_pattern(&args, config);
    let extractor = Extractor::new(pattern).context("Invalid signature pattern")?;

    match args.command {
        Command::Extract(extract_args) => handle_extract(extract_args, &extractor),
        Command::Rewrite(rewrite_args) => handle_rewrite(rewrite_args, &extractor, config),
    }
}
