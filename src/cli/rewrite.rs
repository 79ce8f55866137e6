// src/cli/rewrite.rs
//! Defines the CLI arguments and handler for the `rewrite` subcommand.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::driver::{run_driver, DriverOptions, DriverReport, FileStatus};
use crate::scanner::Extractor;

#[derive(Args, Debug, Clone)]
pub struct RewriteArgs {
    /// Directory holding the resolver files.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// File name suffix of the files to rewrite (defaults to the config value).
    #[arg(long)]
    pub suffix: Option<String>,

    /// File names to leave alone, added to the configured exclusions.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Descend into subdirectories.
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Show what would change without writing anything.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Stop at the first file that fails.
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}

impl RewriteArgs {
    /// Driver options from config with these arguments layered on top.
    pub fn driver_options(&self, config: &AppConfig) -> DriverOptions {
        let mut options = config.driver.clone();
        if let Some(suffix) = &self.suffix {
            options.suffix = suffix.clone();
        }
        options.exclude.extend(self.exclude.iter().cloned());
        options.recursive |= self.recursive;
        options.dry_run = self.dry_run;
        options.fail_fast = self.fail_fast;
        options
    }
}

/// Handler for the `rewrite` subcommand.
pub fn handle_rewrite(args: RewriteArgs, extractor: &Extractor, config: &AppConfig) -> Result<()> {
    let options = args.driver_options(config);
    let report = run_driver(&args.dir, extractor, &options)
        .with_context(|| format!("Failed to rewrite resolvers in {}", args.dir.display()))?;

    print_report(&report, options.dry_run);

    if report.has_failures() {
        bail!("{} of {} files failed", report.failed(), report.outcomes.len());
    }
    Ok(())
}

fn print_report(report: &DriverReport, dry_run: bool) {
    for outcome in &report.outcomes {
        let path = outcome.path.display();
        match &outcome.status {
            FileStatus::Rewritten { name, line_number } => {
                println!("{} {}:{} ({})", "rewrote".green(), path, line_number, name);
            }
            FileStatus::WouldRewrite { name, line_number } => {
                println!("{} {}:{} ({})", "would rewrite".yellow(), path, line_number, name);
            }
            FileStatus::Unchanged => {
                println!("{} {}", "unchanged".dimmed(), path);
            }
            FileStatus::Failed(message) => {
                println!("{} {}: {}", "failed".red().bold(), path, message);
            }
        }
    }

    let verb = if dry_run { "to rewrite" } else { "rewritten" };
    println!(
        "{} {}, {} unchanged, {} failed",
        report.rewritten(),
        verb,
        report.unchanged(),
        report.failed()
    );
}
