use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum CatalogDiscoveryError {
    #[error("catalog directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read catalog directory {0}: {1}")]
    Walk(String, #[source] walkdir::Error),
}

/// Collect every `.toml` catalog file under `root`, sorted by path so record
/// order is stable across runs.
pub fn discover_catalog_files(
    root: &Path,
) -> Result<Vec<PathBuf>, CatalogDiscoveryError> {
    if !root.is_dir() {
        return Err(CatalogDiscoveryError::MissingDir(root.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry
            .map_err(|e| CatalogDiscoveryError::Walk(root.display().to_string(), e))?;
        if entry.file_type().is_file() && is_catalog_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
