use std::fs;
use std::io::Write;
use std::ops::Range;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::args_block::ArgsBlock;
use crate::error::{Result, SigScanError};
use crate::scanner::Extractor;

// --- Public Struct/Enum Definitions ---

/// A single substitution computed from the first qualifying signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewritePlan {
    /// Resolver method the substitution applies to
    pub name: String,
    /// 1-based line of the signature
    pub line_number: usize,
    /// Byte range of the original parameter list
    pub range: Range<usize>,
    /// Parameter list being replaced
    pub original: String,
    /// `args struct` declaration replacing it
    pub replacement: String,
}

impl RewritePlan {
    /// Returns `source` with the substitution applied.
    pub fn apply_to(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() + self.replacement.len());
        out.push_str(&source[..self.range.start]);
        out.push_str(&self.replacement);
        out.push_str(&source[self.range.end..]);
        out
    }
}

#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// Compute the plan but leave the file untouched.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The file was rewritten with this plan.
    Rewritten(RewritePlan),
    /// Dry run: the file would be rewritten with this plan.
    Planned(RewritePlan),
    /// No qualifying signature.
    Unchanged,
}

// --- Public API Functions ---

/// Computes the substitution for the first qualifying signature in `source`.
///
/// Later signatures in the same source are left alone. Returns `Ok(None)`
/// when nothing matches.
pub fn plan_rewrite(extractor: &Extractor, source: &str) -> Result<Option<RewritePlan>> {
    let Some(found) = extractor.first_match(source) else {
        return Ok(None);
    };

    let block = ArgsBlock::parse(found.params).map_err(|e| {
        SigScanError::InvalidParameter(format!(
            "cannot build args for {} (line {}): {}",
            found.name, found.line_number, e
        ))
    })?;

    Ok(Some(RewritePlan {
        name: found.name.to_string(),
        line_number: found.line_number,
        range: found.params_span.clone(),
        original: found.params.to_string(),
        replacement: block.render(),
    }))
}

/// Rewrites the first qualifying signature of the file at `file_path`.
///
/// The whole file is read before anything is written. The new content goes
/// to a temp file in the same directory which is then persisted over the
/// original.
pub fn apply_rewrite(
    file_path: &Path,
    extractor: &Extractor,
    options: &RewriteOptions,
) -> Result<RewriteOutcome> {
    let original_content = fs::read_to_string(file_path).map_err(|source| SigScanError::FileRead {
        path: file_path.to_path_buf(),
        source,
    })?;

    let Some(plan) = plan_rewrite(extractor, &original_content)? else {
        log::debug!("No resolver signature in {}", file_path.display());
        return Ok(RewriteOutcome::Unchanged);
    };

    if options.dry_run {
        log::info!(
            "Would rewrite {} at {}:{}",
            plan.name,
            file_path.display(),
            plan.line_number
        );
        return Ok(RewriteOutcome::Planned(plan));
    }

    let new_content = plan.apply_to(&original_content);
    persist_content(file_path, &new_content)?;

    log::info!(
        "Rewrote {} at {}:{}",
        plan.name,
        file_path.display(),
        plan.line_number
    );
    Ok(RewriteOutcome::Rewritten(plan))
}

// --- Helper Functions (Private to this module) ---

fn persist_content(file_path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| SigScanError::FileWrite {
        path: file_path.to_path_buf(),
        source,
    };

    // The temp file is created 0600; the original mode is carried over.
    let permissions = fs::metadata(file_path).map_err(write_err)?.permissions();

    let parent_dir = match file_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
    temp_file.write_all(content.as_bytes()).map_err(write_err)?;
    temp_file.flush().map_err(write_err)?;
    temp_file.as_file().set_permissions(permissions).map_err(write_err)?;
    temp_file
        .persist(file_path)
        .map_err(|e| SigScanError::Persist {
            path: file_path.to_path_buf(),
            message: e.error.to_string(),
        })?;
    Ok(())
}
