//! Serialized series document.
//!
//! This is the JSON shape the CLI reads:
//!
//! ```json
//! {
//!   "start_time": 10000,
//!   "end_time": 13000,
//!   "samples": [
//!     { "timestamp": 10100, "value": 0 },
//!     { "timestamp": 12800, "value": 0, "exception": true }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use slawatch_types::{Sample, SchemaVersion, UptimeSeries, Window};

/// An uptime series paired with the window it should be evaluated over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDocument {
    /// Schema version; documents without one are read as the current version.
    #[serde(default)]
    pub version: SchemaVersion,

    /// Evaluation window.
    #[serde(flatten)]
    pub window: Window,

    /// Samples, ascending by timestamp.
    pub samples: UptimeSeries,
}

impl SeriesDocument {
    /// Create a document from a window and series.
    pub fn new(window: Window, samples: UptimeSeries) -> Self {
        Self {
            version: SchemaVersion::current(),
            window,
            samples,
        }
    }

    /// Create a builder for a document.
    pub fn builder(start_time: i64, end_time: i64) -> SeriesDocumentBuilder {
        SeriesDocumentBuilder::new(Window::new(start_time, end_time))
    }

    /// Replace the window bounds that are given, keeping the others.
    pub fn with_window_overrides(mut self, start_time: Option<i64>, end_time: Option<i64>) -> Self {
        if let Some(start) = start_time {
            self.window.start = start;
        }
        if let Some(end) = end_time {
            self.window.end = end;
        }
        self
    }
}

/// Builder for `SeriesDocument`.
#[derive(Debug)]
pub struct SeriesDocumentBuilder {
    window: Window,
    samples: UptimeSeries,
}

impl SeriesDocumentBuilder {
    /// Create a builder for the given window.
    pub fn new(window: Window) -> Self {
        Self {
            window,
            samples: UptimeSeries::new(),
        }
    }

    /// Append a regular sample.
    pub fn sample(mut self, timestamp: i64, value: i64) -> Self {
        self.samples.push(Sample::new(timestamp, value));
        self
    }

    /// Append a sample flagged as an exception.
    pub fn exception(mut self, timestamp: i64, value: i64) -> Self {
        self.samples.push(Sample::exception(timestamp, value));
        self
    }

    /// Build the document.
    pub fn build(self) -> SeriesDocument {
        SeriesDocument::new(self.window, self.samples)
    }
}
