use anyhow::{Context, Result};
use clap::Parser;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use sigscan_lib::{
    cli::{handle_command, CliArgs},
    config,
};

fn main() -> Result<()> {
    // --- Setup Tracing ---
    // Logs go to stderr so stdout carries only extracted output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // --- Parse Args ---
    let args = CliArgs::parse();

    // --- Load Configuration ---
    let config = config::load_config(args.config.as_ref()).context("Failed to load configuration")?;
    tracing::debug!("Using pattern: {:?}", config.pattern);

    // --- Execute Command ---
    tracing::info!("Executing command: {:?}", args.command);
    let result = handle_command(args, &config);

    // --- Handle Result ---
    if let Err(e) = result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        exit(1);
    } else {
        tracing::debug!("Command executed successfully.");
    }

    Ok(())
}
