//! Data file catalog.
//!
//! Enumerates the array-data files available for selection. The underlying
//! directory order is platform-dependent, so entries are sorted
//! lexicographically to keep the selection UI reproducible. A missing or
//! empty directory yields an empty catalog, never an error; the presentation
//! layer renders that as an empty selection state.

use std::path::{Path, PathBuf};

use crate::config::CatalogConfig;

/// Session catalog of selectable data files.
#[derive(Debug, Clone)]
pub struct Catalog {
    data_dir: PathBuf,
    extension: String,
    files: Vec<String>,
}

impl Catalog {
    /// Scan the configured directory once and hold the listing for the
    /// session. Call [`Catalog::refresh`] to pick up added or removed files.
    pub fn scan(config: &CatalogConfig) -> Self {
        let files = list_data_files(&config.data_dir, &config.extension);
        Self {
            data_dir: config.data_dir.clone(),
            extension: config.extension.clone(),
            files,
        }
    }

    /// File identifiers (file names), sorted lexicographically.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Re-scan the data directory.
    pub fn refresh(&mut self) {
        self.files = list_data_files(&self.data_dir, &self.extension);
    }

    /// Resolve a file identifier back to a path inside the data directory.
    ///
    /// Only identifiers produced by the scan resolve; this also rejects any
    /// id containing path separators, so callers cannot escape the data
    /// directory.
    pub fn resolve(&self, file_id: &str) -> Option<PathBuf> {
        if !self.files.iter().any(|f| f == file_id) {
            return None;
        }
        Some(self.data_dir.join(file_id))
    }
}

/// List files in `dir` with the given extension, sorted lexicographically.
///
/// A missing or unreadable directory yields an empty listing.
pub fn list_data_files(dir: &Path, extension: &str) -> Vec<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), %err, "data directory not readable");
            return Vec::new();
        }
    };

    let mut files: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| {
            Path::new(name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(extension))
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    files
}
