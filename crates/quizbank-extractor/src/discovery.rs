//! Recursive discovery of input documents

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Find every document under `dir`, recursively, sorted by path.
///
/// Files whose name starts with the configured lock-file prefix are skipped.
/// Unreadable directories, `dir` included, are logged and skipped; only a
/// missing `dir` is an error.
pub fn discover_documents(
    dir: &Path,
    config: &ExtractorConfig,
) -> Result<Vec<PathBuf>, ExtractorError> {
    if !dir.is_dir() {
        return Err(ExtractorError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut found = Vec::new();
    if let Err(e) = walk(dir, config, &mut found) {
        warn!("Cannot read '{}': {}", dir.display(), e);
    }
    found.sort();

    info!("Found {} documents in {}", found.len(), dir.display());
    Ok(found)
}

fn walk(dir: &Path, config: &ExtractorConfig, found: &mut Vec<PathBuf>) -> Result<(), ExtractorError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            if let Err(e) = walk(&path, config, found) {
                warn!("Skipping directory '{}': {}", path.display(), e);
            }
        } else if is_document(&path, config) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_document(path: &Path, config: &ExtractorConfig) -> bool {
    let has_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(&config.extension));
    let is_lock_file = !config.lock_file_prefix.is_empty()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(&config.lock_file_prefix));

    has_extension && !is_lock_file
}
