//! Error types for availability calculations.

use thiserror::Error;

/// Malformed input passed to a calculation.
///
/// Every variant is a caller bug in how the telemetry was assembled; none of
/// them is transient, and no partial result accompanies any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// The window starts or ends before zero.
    #[error("start or end time is less than 0 (start {start}, end {end})")]
    NegativeWindow { start: i64, end: i64 },

    /// No samples were provided.
    #[error("timestamp array is empty")]
    EmptySeries,

    /// The window starts after the first sample.
    #[error("start time {start} is greater than the first timestamp {first}")]
    StartAfterFirstSample { start: i64, first: i64 },

    /// The window ends before the last sample.
    #[error("end time {end} is less than the last timestamp {last}")]
    EndBeforeLastSample { end: i64, last: i64 },

    /// Timestamps and values differ in length.
    #[error("length of timestamps ({timestamps}) and uptime values ({values}) is unmatched")]
    ValueLengthMismatch { timestamps: usize, values: usize },

    /// Timestamps and exception flags differ in length.
    #[error("length of timestamps ({timestamps}) and exceptions ({exceptions}) is unmatched")]
    ExceptionLengthMismatch { timestamps: usize, exceptions: usize },

    /// A timestamp is smaller than the one before it.
    #[error("unordered timestamps detected at index {index}")]
    UnorderedTimestamps { index: usize },
}

/// Result alias for calculations.
pub type Result<T, E = InvalidArgument> = std::result::Result<T, E>;
