//! In-memory series source.

use anyhow::Result;

use super::{SeriesDocument, SeriesSource};

/// A source that hands out a document it already holds.
///
/// Useful for library callers that assemble telemetry themselves and for
/// tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    document: SeriesDocument,
    description: String,
}

impl StaticSource {
    /// Wrap a document.
    pub fn new(document: SeriesDocument, source_description: &str) -> Self {
        Self {
            document,
            description: format!("memory: {}", source_description),
        }
    }
}

impl SeriesSource for StaticSource {
    fn load(&mut self) -> Result<SeriesDocument> {
        Ok(self.document.clone())
    }

    fn description(&self) -> &str {
        &self.description
    }
}
