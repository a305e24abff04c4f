//! Availability accounting policies.

use core::fmt;
use core::str::FromStr;

/// The accounting rule used to turn a series into an availability figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "minicbor", derive(minicbor::Encode, minicbor::Decode))]
#[cfg_attr(feature = "minicbor", cbor(index_only))]
pub enum AvailabilityPolicy {
    /// Any positive reading counts the whole interval as connected.
    #[cfg_attr(feature = "minicbor", n(0))]
    Connectivity,
    /// Counter growth only; was the device itself up.
    #[cfg_attr(feature = "minicbor", n(1))]
    Uptime,
    /// Device state combined with connectivity.
    #[cfg_attr(feature = "minicbor", n(2))]
    DeviceAware,
    /// Device-aware accounting with exception samples counted as available.
    #[cfg_attr(feature = "minicbor", n(3))]
    ExceptionAware,
}

impl AvailabilityPolicy {
    /// All policies, in report order.
    pub const ALL: [AvailabilityPolicy; 4] = [
        AvailabilityPolicy::Connectivity,
        AvailabilityPolicy::Uptime,
        AvailabilityPolicy::DeviceAware,
        AvailabilityPolicy::ExceptionAware,
    ];

    /// Returns the display label for this policy.
    pub const fn label(&self) -> &'static str {
        match self {
            AvailabilityPolicy::Connectivity => "Connectivity SLA",
            AvailabilityPolicy::Uptime => "Uptime SLA",
            AvailabilityPolicy::DeviceAware => "SLA 1",
            AvailabilityPolicy::ExceptionAware => "SLA 2",
        }
    }

    /// Short machine name, accepted by `FromStr`.
    pub const fn name(&self) -> &'static str {
        match self {
            AvailabilityPolicy::Connectivity => "connectivity",
            AvailabilityPolicy::Uptime => "uptime",
            AvailabilityPolicy::DeviceAware => "device-aware",
            AvailabilityPolicy::ExceptionAware => "exception-aware",
        }
    }
}

impl fmt::Display for AvailabilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy;

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "unknown policy (expected connectivity, uptime, device-aware or exception-aware)",
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownPolicy {}

impl FromStr for AvailabilityPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "connectivity" | "snmp" => Ok(AvailabilityPolicy::Connectivity),
            "uptime" => Ok(AvailabilityPolicy::Uptime),
            "device-aware" | "sla1" => Ok(AvailabilityPolicy::DeviceAware),
            "exception-aware" | "sla2" => Ok(AvailabilityPolicy::ExceptionAware),
            _ => Err(UnknownPolicy),
        }
    }
}
