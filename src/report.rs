//! Availability report covering every policy for one series.

use serde::{Deserialize, Serialize};
use slawatch_types::{AvailabilityPolicy, SchemaVersion, UptimeSeries, UptimeState, Window};
use tracing::debug;

use crate::calculator;
use crate::error::Result;

/// All four availability figures, and optionally the per-sample states,
/// for a series evaluated over a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    /// Schema version for forward compatibility.
    pub version: SchemaVersion,
    /// Window the figures were computed over.
    pub window: Window,
    /// Number of samples in the series.
    pub samples: usize,
    /// Number of samples flagged as exceptions.
    pub exceptions: usize,
    /// Fraction of the window with any positive reading.
    pub connectivity: f64,
    /// Fraction of the window the device was up by counter growth.
    pub uptime: f64,
    /// Device-aware availability.
    pub device_aware: f64,
    /// Device-aware availability with exceptions counted as available.
    pub exception_aware: f64,
    /// Per-sample states, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<UptimeState>>,
}

impl AvailabilityReport {
    /// Compute every policy for `series` over `window`.
    ///
    /// The series is validated once, exception flags included, and every
    /// policy then runs on the same arrays.
    pub fn compute(window: &Window, series: &UptimeSeries) -> Result<Self> {
        Self::build(window, series, false)
    }

    /// Compute the report including per-sample states.
    pub fn compute_with_states(window: &Window, series: &UptimeSeries) -> Result<Self> {
        Self::build(window, series, true)
    }

    fn build(window: &Window, series: &UptimeSeries, with_states: bool) -> Result<Self> {
        let timestamps = series.timestamps();
        let values = series.values();
        let flags = series.exceptions();
        let exceptions = Some(flags.as_slice());
        let (start, end) = (window.start, window.end);

        calculator::validate(start, end, &timestamps, &values, exceptions)?;
        let ratio =
            |policy| calculator::evaluate(policy, start, end, &timestamps, &values, exceptions);

        let report = Self {
            version: SchemaVersion::current(),
            window: *window,
            samples: series.len(),
            exceptions: series.exception_count(),
            connectivity: ratio(AvailabilityPolicy::Connectivity),
            uptime: ratio(AvailabilityPolicy::Uptime),
            device_aware: ratio(AvailabilityPolicy::DeviceAware),
            exception_aware: ratio(AvailabilityPolicy::ExceptionAware),
            states: with_states.then(|| calculator::classify(start, &timestamps, &values)),
        };
        debug!(samples = report.samples, "computed availability report");
        Ok(report)
    }

    /// Availability under a single policy, as a ratio in `[0, 1]`.
    pub fn availability(&self, policy: AvailabilityPolicy) -> f64 {
        match policy {
            AvailabilityPolicy::Connectivity => self.connectivity,
            AvailabilityPolicy::Uptime => self.uptime,
            AvailabilityPolicy::DeviceAware => self.device_aware,
            AvailabilityPolicy::ExceptionAware => self.exception_aware,
        }
    }

    /// Availability under a single policy, as a percentage.
    pub fn percent(&self, policy: AvailabilityPolicy) -> f64 {
        self.availability(policy) * 100.0
    }

    /// Iterate over `(policy, ratio)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (AvailabilityPolicy, f64)> + '_ {
        AvailabilityPolicy::ALL.into_iter().map(|p| (p, self.availability(p)))
    }
}
