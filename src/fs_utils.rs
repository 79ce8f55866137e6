use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, SigScanError};

/// Checks if a directory entry corresponds to a typical VCS-ignored directory.
/// Currently only checks for `.git`.
fn is_vcs_ignored(entry: &walkdir::DirEntry) -> bool {
    entry.file_name()
         .to_str()
         .map(|s| s == ".git")
         .unwrap_or(false)
}

/// Which files of a directory are candidates for rewriting.
#[derive(Debug, Clone)]
pub struct CandidateFilter<'a> {
    /// Required file name suffix, e.g. `.resolvers.go`.
    pub suffix: &'a str,
    /// File names (or paths relative to the search root) to skip.
    pub exclude: &'a [String],
    /// Descend into subdirectories.
    pub recursive: bool,
}

impl CandidateFilter<'_> {
    fn accepts(&self, root: &Path, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if !file_name.ends_with(self.suffix) {
            return false;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        let excluded = self.exclude.iter().any(|ex| {
            ex == file_name || Path::new(ex) == relative
        });
        if excluded {
            log::debug!("Skipping excluded file: {}", path.display());
        }
        !excluded
    }
}

/// Lists regular files under `search_path` accepted by `filter`, sorted by path.
///
/// # Arguments
///
/// * `search_path` - The directory to enumerate.
/// * `filter` - Suffix, exclusion set and recursion settings.
///
/// # Returns
///
/// The matching file paths (joined onto `search_path`), or an error if the
/// search path does not exist or is not a directory.
pub fn collect_candidate_files(search_path: &Path, filter: &CandidateFilter) -> Result<Vec<PathBuf>> {
    if !search_path.exists() {
        return Err(SigScanError::PathNotFound {
            path: search_path.display().to_string(),
        });
    }
    if !search_path.is_dir() {
        return Err(SigScanError::NotADirectory {
            path: search_path.display().to_string(),
        });
    }

    log::debug!(
        "Collecting '*{}' files in {} (recursive: {})",
        filter.suffix,
        search_path.display(),
        filter.recursive
    );

    let mut files = Vec::new();
    if filter.recursive {
        for entry_result in WalkDir::new(search_path).into_iter().filter_entry(|e| !is_vcs_ignored(e)) {
            match entry_result {
                Ok(entry) => {
                    if entry.file_type().is_file() && filter.accepts(search_path, entry.path()) {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(err) => {
                    // Log and keep walking
                    log::error!(
                        "Error walking directory entry near '{}': {}",
                        err.path().unwrap_or(search_path).display(),
                        err
                    );
                }
            }
        }
    } else {
        for entry in fs::read_dir(search_path)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_file() && filter.accepts(search_path, &path) {
                files.push(path);
            }
        }
    }

    files.sort();
    log::debug!("Found {} candidate files in {}", files.len(), search_path.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "package api\n").unwrap();
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_flat_listing_filters_suffix_and_exclusions() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "menu.resolvers.go");
        touch(dir.path(), "order.resolvers.go");
        touch(dir.path(), "schema.resolvers.go");
        touch(dir.path(), "menu.types.go");
        touch(dir.path(), "nested/user.resolvers.go");

        let exclude = vec!["schema.resolvers.go".to_string()];
        let filter = CandidateFilter { suffix: ".resolvers.go", exclude: &exclude, recursive: false };
        let files = collect_candidate_files(dir.path(), &filter).unwrap();

        assert_eq!(names(&files, dir.path()), vec!["menu.resolvers.go", "order.resolvers.go"]);
    }

    #[test]
    fn test_recursive_listing() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "menu.resolvers.go");
        touch(dir.path(), "nested/user.resolvers.go");
        touch(dir.path(), ".git/hooks.resolvers.go");

        let filter = CandidateFilter { suffix: ".resolvers.go", exclude: &[], recursive: true };
        let files = collect_candidate_files(dir.path(), &filter).unwrap();

        assert_eq!(names(&files, dir.path()), vec!["menu.resolvers.go", "nested/user.resolvers.go"]);
    }

    #[test]
    fn test_exclusion_by_relative_path() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a/user.resolvers.go");
        touch(dir.path(), "b/user.resolvers.go");

        let exclude = vec!["a/user.resolvers.go".to_string()];
        let filter = CandidateFilter { suffix: ".resolvers.go", exclude: &exclude, recursive: true };
        let files = collect_candidate_files(dir.path(), &filter).unwrap();

        assert_eq!(names(&files, dir.path()), vec!["b/user.resolvers.go"]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let filter = CandidateFilter { suffix: ".resolvers.go", exclude: &[], recursive: false };
        let err = collect_candidate_files(&dir.path().join("nope"), &filter).unwrap_err();
        assert!(matches!(err, SigScanError::PathNotFound { .. }));
    }

    #[test]
    fn test_file_instead_of_directory() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "menu.resolvers.go");
        let filter = CandidateFilter { suffix: ".resolvers.go", exclude: &[], recursive: false };
        let err = collect_candidate_files(&dir.path().join("menu.resolvers.go"), &filter).unwrap_err();
        assert!(matches!(err, SigScanError::NotADirectory { .. }));
    }
}
