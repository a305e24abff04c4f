//! File-based series source.
//!
//! Reads a JSON series document from disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::{SeriesDocument, SeriesSource};

/// A source that reads a series document from a JSON file.
///
/// The file is read afresh on every load, so edits between loads are
/// picked up.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeriesSource for FileSource {
    fn load(&mut self) -> Result<SeriesDocument> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Read error: {}", self.path.display()))?;
        let document: SeriesDocument = serde_json::from_str(&content)
            .with_context(|| format!("Parse error: {}", self.path.display()))?;

        if !document.version.is_compatible() {
            anyhow::bail!(
                "Unsupported schema version {}.{} in {}",
                document.version.major,
                document.version.minor,
                self.path.display()
            );
        }

        debug!(
            path = %self.path.display(),
            samples = document.samples.len(),
            "loaded series document"
        );
        Ok(document)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
