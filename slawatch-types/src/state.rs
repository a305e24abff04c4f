//! Per-sample uptime state labels.

use core::fmt;

/// Classification of a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "minicbor", derive(minicbor::Encode, minicbor::Decode))]
#[cfg_attr(feature = "minicbor", cbor(index_only))]
pub enum UptimeState {
    /// The counter advanced during the interval ending at this sample.
    #[cfg_attr(feature = "minicbor", n(0))]
    Up,
    /// The counter did not advance.
    #[cfg_attr(feature = "minicbor", n(1))]
    Down,
    /// Part of the trailing run of non-positive readings; not yet
    /// determinable as up or down.
    #[cfg_attr(feature = "minicbor", n(2))]
    Open,
}

impl UptimeState {
    /// Lowercase label, as used in serialized output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            UptimeState::Up => "up",
            UptimeState::Down => "down",
            UptimeState::Open => "open",
        }
    }
}

impl fmt::Display for UptimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
