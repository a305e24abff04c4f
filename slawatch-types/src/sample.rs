//! Uptime samples and series.

use alloc::vec::Vec;

/// A single reading of a cumulative uptime counter.
///
/// `value` is the counter as reported by the monitored device, e.g. seconds
/// of uptime since its last restart. It is expected to grow between
/// readings but may drop back at any point when the counter resets. A value
/// of zero or below means no usable reading was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "minicbor", derive(minicbor::Encode, minicbor::Decode))]
pub struct Sample {
    /// When the reading was taken.
    #[cfg_attr(feature = "minicbor", n(0))]
    pub timestamp: i64,

    /// Counter value at `timestamp`.
    #[cfg_attr(feature = "minicbor", n(1))]
    pub value: i64,

    /// Marks a justified down period (e.g. scheduled maintenance).
    ///
    /// Exception samples count as available under exception-aware accounting
    /// whatever the counter says.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
    #[cfg_attr(feature = "minicbor", n(2))]
    pub exception: bool,
}

#[cfg(feature = "serde")]
fn is_false(b: &bool) -> bool {
    !*b
}

impl Sample {
    /// Create a regular sample.
    pub const fn new(timestamp: i64, value: i64) -> Self {
        Self {
            timestamp,
            value,
            exception: false,
        }
    }

    /// Create a sample flagged as an exception.
    pub const fn exception(timestamp: i64, value: i64) -> Self {
        Self {
            timestamp,
            value,
            exception: true,
        }
    }

    /// Whether the reading carries a usable (positive) counter value.
    pub const fn has_reading(&self) -> bool {
        self.value > 0
    }
}

/// An ordered sequence of uptime samples.
///
/// The series does not enforce ordering itself; calculations validate it
/// before use. Accessors return fresh vectors so callers can hand the
/// parallel arrays to the calculator without touching the series.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "minicbor", derive(minicbor::Encode, minicbor::Decode))]
#[cfg_attr(feature = "minicbor", cbor(transparent))]
pub struct UptimeSeries(#[cfg_attr(feature = "minicbor", n(0))] pub Vec<Sample>);

impl UptimeSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for a series.
    pub fn builder() -> UptimeSeriesBuilder {
        UptimeSeriesBuilder::new()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the samples in order.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.0.iter()
    }

    /// Append a sample.
    pub fn push(&mut self, sample: Sample) {
        self.0.push(sample);
    }

    /// First sample, if any.
    pub fn first(&self) -> Option<&Sample> {
        self.0.first()
    }

    /// Last sample, if any.
    pub fn last(&self) -> Option<&Sample> {
        self.0.last()
    }

    /// Timestamps of all samples.
    pub fn timestamps(&self) -> Vec<i64> {
        self.0.iter().map(|s| s.timestamp).collect()
    }

    /// Counter values of all samples.
    pub fn values(&self) -> Vec<i64> {
        self.0.iter().map(|s| s.value).collect()
    }

    /// Exception flags of all samples.
    pub fn exceptions(&self) -> Vec<bool> {
        self.0.iter().map(|s| s.exception).collect()
    }

    /// Number of samples flagged as exceptions.
    pub fn exception_count(&self) -> usize {
        self.0.iter().filter(|s| s.exception).count()
    }
}

impl From<Vec<Sample>> for UptimeSeries {
    fn from(samples: Vec<Sample>) -> Self {
        Self(samples)
    }
}

impl FromIterator<Sample> for UptimeSeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a UptimeSeries {
    type Item = &'a Sample;
    type IntoIter = core::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builder for `UptimeSeries`.
#[derive(Debug, Default)]
pub struct UptimeSeriesBuilder {
    samples: Vec<Sample>,
}

impl UptimeSeriesBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
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

    /// Append samples from parallel timestamp/value slices.
    ///
    /// Pairs beyond the shorter of the two slices are ignored.
    pub fn readings(mut self, timestamps: &[i64], values: &[i64]) -> Self {
        self.samples.extend(
            timestamps
                .iter()
                .zip(values)
                .map(|(&t, &v)| Sample::new(t, v)),
        );
        self
    }

    /// Build the series.
    pub fn build(self) -> UptimeSeries {
        UptimeSeries(self.samples)
    }
}
