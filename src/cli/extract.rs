// src/cli/extract.rs
//! The `extract` subcommand.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::scanner::Extractor;

const STDIN_MARKER: &str = "-";

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Files to scan. Reads stdin when none are given or for "-".
    pub files: Vec<PathBuf>,

    /// Print one JSON object per match instead of the bare parameter list.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Handler for the `extract` subcommand.
pub fn handle_extract(args: ExtractArgs, extractor: &Extractor) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let inputs = if args.files.is_empty() {
        vec![PathBuf::from(STDIN_MARKER)]
    } else {
        args.files
    };

    let mut total = 0;
    for input in &inputs {
        let (label, source) = read_input(input)?;
        total += write_matches(&mut out, extractor, &label, &source, args.json)?;
    }
    out.flush()?;

    log::debug!("Extracted {} parameter lists from {} inputs", total, inputs.len());
    Ok(())
}

fn read_input(input: &Path) -> Result<(String, String)> {
    if input.as_os_str() == STDIN_MARKER {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(("<stdin>".to_string(), source));
    }
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read file: {}", input.display()))?;
    Ok((input.display().to_string(), source))
}

/// Writes every match of `source` and returns how many were written.
///
/// Whitespace runs inside a parameter list are collapsed so that each match
/// takes exactly one line.
pub fn write_matches<W: Write>(
    out: &mut W,
    extractor: &Extractor,
    label: &str,
    source: &str,
    json: bool,
) -> Result<usize> {
    let mut written = 0;
    for found in extractor.matches(source) {
        let params = collapse_whitespace(found.params);
        if json {
            let record = serde_json::json!({
                "file": label,
                "name": found.name,
                "line": found.line_number,
                "params": params,
            });
            writeln!(out, "{}", record)?;
        } else {
            writeln!(out, "{}", params)?;
        }
        written += 1;
    }
    Ok(written)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
