//! Evaluation window.

/// The period an availability figure is computed over.
///
/// Both bounds are in the same caller-defined unit as sample timestamps.
/// A valid window encloses every sample of the series it is paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "minicbor", derive(minicbor::Encode, minicbor::Decode))]
pub struct Window {
    /// Start of the window (inclusive).
    #[cfg_attr(feature = "serde", serde(rename = "start_time"))]
    #[cfg_attr(feature = "minicbor", n(0))]
    pub start: i64,

    /// End of the window (inclusive).
    #[cfg_attr(feature = "serde", serde(rename = "end_time"))]
    #[cfg_attr(feature = "minicbor", n(1))]
    pub end: i64,
}

impl Window {
    /// Create a window from its bounds.
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Length of the window. Negative if the bounds are inverted.
    pub const fn span(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Check whether `timestamp` falls within the window.
    pub const fn contains(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_and_contains() {
        let w = Window::new(10_000, 13_000);
        assert_eq!(w.span(), 3_000);
        assert!(w.contains(10_000));
        assert!(w.contains(13_000));
        assert!(!w.contains(13_001));
        assert!(!w.contains(9_999));
    }

    #[test]
    fn empty_window() {
        let w = Window::new(5, 5);
        assert_eq!(w.span(), 0);
        assert!(w.contains(5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_field_names() {
        let json = serde_json::to_string(&Window::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"start_time":1,"end_time":2}"#);
    }
}
