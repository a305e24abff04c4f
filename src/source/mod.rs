//! Series source abstraction for loading uptime telemetry.
//!
//! Polling devices and storing their readings happen elsewhere; this module
//! only defines how an already collected series reaches the calculator.

mod document;
mod file;
mod memory;

pub use document::{SeriesDocument, SeriesDocumentBuilder};
pub use file::FileSource;
pub use memory::StaticSource;

use std::fmt::Debug;

use anyhow::Result;

/// Trait for loading an uptime series together with its evaluation window.
///
/// # Example
///
/// ```no_run
/// use slawatch::{FileSource, SeriesSource};
///
/// let mut source = FileSource::new("series.json");
/// let document = source.load()?;
/// println!("Loaded {} samples", document.samples.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub trait SeriesSource: Debug {
    /// Load the series document.
    fn load(&mut self) -> Result<SeriesDocument>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;
}
