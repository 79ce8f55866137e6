//! Batch rewriting of every resolver file in a directory.
//!
//! Files are independent: each one is read, planned and written on its own,
//! and a failure is recorded against that file while the rest carry on.
//! With `fail_fast` the first failure ends the run instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_FILE_SUFFIX;
use crate::edit::{apply_rewrite, RewriteOptions, RewriteOutcome};
use crate::error::{Result, SigScanError};
use crate::fs_utils::{collect_candidate_files, CandidateFilter};
use crate::pattern::CaptureClass;
use crate::scanner::Extractor;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
/// Settings for a directory run.
pub struct DriverOptions {
    /// File name suffix of the files to process.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// File names (or root-relative paths) to leave alone.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Descend into subdirectories.
    #[serde(default)]
    pub recursive: bool,
    /// Report planned rewrites without writing.
    #[serde(skip)]
    pub dry_run: bool,
    /// Abort on the first failing file.
    #[serde(skip)]
    pub fail_fast: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            exclude: Vec::new(),
            recursive: false,
            dry_run: false,
            fail_fast: false,
        }
    }
}

fn default_suffix() -> String {
    DEFAULT_FILE_SUFFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Rewritten; holds the resolver name and its line.
    Rewritten { name: String, line_number: usize },
    /// Dry run; the file would have been rewritten.
    WouldRewrite { name: String, line_number: usize },
    Unchanged,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Per-file results of a directory run, in path order.
#[derive(Debug, Clone, Default)]
pub struct DriverReport {
    pub outcomes: Vec<FileOutcome>,
}

impl DriverReport {
    pub fn rewritten(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Rewritten { .. } | FileStatus::WouldRewrite { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Unchanged))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Rewrites the first resolver signature of every candidate file in `dir`.
///
/// Errors listing the directory are returned directly. Per-file errors are
/// recorded in the report, or returned when `options.fail_fast` is set.
/// The narrow capture class holds no parameter names, so it is rejected
/// before any file is read.
pub fn run_driver(dir: &Path, extractor: &Extractor, options: &DriverOptions) -> Result<DriverReport> {
    if extractor.pattern().capture_class == CaptureClass::Narrow {
        return Err(SigScanError::InvalidParameter(
            "rewrite needs the param_list capture class; the narrow class is for extract only".to_string(),
        ));
    }

    let filter = CandidateFilter {
        suffix: &options.suffix,
        exclude: &options.exclude,
        recursive: options.recursive,
    };
    let files = collect_candidate_files(dir, &filter)?;
    log::info!("Processing {} files in {}", files.len(), dir.display());

    let rewrite_options = RewriteOptions { dry_run: options.dry_run };
    let mut report = DriverReport::default();

    for path in files {
        let status = match apply_rewrite(&path, extractor, &rewrite_options) {
            Ok(RewriteOutcome::Rewritten(plan)) => FileStatus::Rewritten {
                name: plan.name,
                line_number: plan.line_number,
            },
            Ok(RewriteOutcome::Planned(plan)) => FileStatus::WouldRewrite {
                name: plan.name,
                line_number: plan.line_number,
            },
            Ok(RewriteOutcome::Unchanged) => FileStatus::Unchanged,
            Err(e) => {
                if options.fail_fast {
                    return Err(e);
                }
                log::error!("Failed to rewrite {}: {}", path.display(), e);
                FileStatus::Failed(e.to_string())
            }
        };
        report.outcomes.push(FileOutcome { path, status });
    }

    log::info!(
        "Done: {} rewritten, {} unchanged, {} failed",
        report.rewritten(),
        report.unchanged(),
        report.failed()
    );
    Ok(report)
}
