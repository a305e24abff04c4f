//! Availability calculations over cumulative uptime counter series.
//!
//! Every calculation takes the evaluation window and parallel arrays of
//! sample timestamps and counter values (plus exception flags where they
//! matter), validates them, and then runs the same pipeline:
//!
//! ```text
//! timestamps + values
//!        │
//!        ▼
//! validate() ──▶ InvalidArgument
//!        │
//!        ▼
//! Intervals::presence() | Intervals::spread()
//!        │
//!        ▼
//! policy adjustment (device-aware / exception-aware only)
//!        │
//!        ▼
//! Intervals::close() ──▶ ratio()
//! ```
//!
//! ## Example
//!
//! ```
//! use slawatch::calculator;
//!
//! let timestamps = [100, 200, 300, 400];
//! let values = [0, 70, 170, 0];
//!
//! let uptime = calculator::uptime_availability(0, 400, &timestamps, &values)?;
//! assert_eq!(uptime, 170.0 / 400.0);
//! # Ok::<(), slawatch::InvalidArgument>(())
//! ```

mod intervals;
mod policy;
mod state;
mod validate;

pub use intervals::Intervals;
pub use validate::validate;

use slawatch_types::{AvailabilityPolicy, UptimeState};
use tracing::trace;

use crate::error::Result;

/// Availability under any policy.
///
/// `exceptions` is only consulted by [`AvailabilityPolicy::ExceptionAware`];
/// passing `None` there means no sample is an exception. When given it is
/// validated against the timestamps whatever the policy.
pub fn availability(
    policy: AvailabilityPolicy,
    start_time: i64,
    end_time: i64,
    timestamps: &[i64],
    values: &[i64],
    exceptions: Option<&[bool]>,
) -> Result<f64> {
    validate(start_time, end_time, timestamps, values, exceptions)?;
    Ok(evaluate(policy, start_time, end_time, timestamps, values, exceptions))
}

/// Run the pipeline on a series that already passed [`validate`].
pub(crate) fn evaluate(
    policy: AvailabilityPolicy,
    start_time: i64,
    end_time: i64,
    timestamps: &[i64],
    values: &[i64],
    exceptions: Option<&[bool]>,
) -> f64 {
    let mut intervals = match policy {
        AvailabilityPolicy::Connectivity => Intervals::presence(start_time, timestamps, values),
        AvailabilityPolicy::Uptime => Intervals::spread(start_time, timestamps, values),
        AvailabilityPolicy::DeviceAware => {
            let mut intervals = Intervals::spread(start_time, timestamps, values);
            policy::charge_connectivity_loss(&mut intervals, values, None);
            intervals
        }
        AvailabilityPolicy::ExceptionAware => {
            let mut intervals = Intervals::spread(start_time, timestamps, values);
            policy::charge_connectivity_loss(&mut intervals, values, exceptions);
            intervals
        }
    };

    if let Some(&last) = timestamps.last() {
        intervals.close(end_time, last);
    }
    let ratio = intervals.ratio();
    trace!(policy = policy.name(), ratio, samples = timestamps.len(), "computed availability");
    ratio
}

/// Fraction of the window with any positive reading.
///
/// Answers whether the monitoring connection was up: an interval counts in
/// full as soon as its closing sample reports anything.
pub fn connectivity_availability(
    start_time: i64,
    end_time: i64,
    timestamps: &[i64],
    values: &[i64],
) -> Result<f64> {
    availability(
        AvailabilityPolicy::Connectivity,
        start_time,
        end_time,
        timestamps,
        values,
        None,
    )
}

/// Fraction of the window the device itself was up, judged by counter
/// growth alone and independent of connectivity gaps.
pub fn uptime_availability(
    start_time: i64,
    end_time: i64,
    timestamps: &[i64],
    values: &[i64],
) -> Result<f64> {
    availability(AvailabilityPolicy::Uptime, start_time, end_time, timestamps, values, None)
}

/// Device-aware availability.
///
/// An interval is down only when the device was up but its reading was
/// missing. The span before the first reading and the trailing run without
/// readings count nothing.
pub fn policy1_availability(
    start_time: i64,
    end_time: i64,
    timestamps: &[i64],
    values: &[i64],
) -> Result<f64> {
    availability(
        AvailabilityPolicy::DeviceAware,
        start_time,
        end_time,
        timestamps,
        values,
        None,
    )
}

/// Device-aware availability where exception samples count as available.
pub fn policy2_availability(
    start_time: i64,
    end_time: i64,
    timestamps: &[i64],
    values: &[i64],
    exceptions: &[bool],
) -> Result<f64> {
    availability(
        AvailabilityPolicy::ExceptionAware,
        start_time,
        end_time,
        timestamps,
        values,
        Some(exceptions),
    )
}

/// Up/down/open label for each sample.
pub fn state_series(
    start_time: i64,
    end_time: i64,
    timestamps: &[i64],
    values: &[i64],
) -> Result<Vec<UptimeState>> {
    validate(start_time, end_time, timestamps, values, None)?;
    Ok(classify(start_time, timestamps, values))
}

/// State labels for a series that already passed [`validate`].
pub(crate) fn classify(start_time: i64, timestamps: &[i64], values: &[i64]) -> Vec<UptimeState> {
    let intervals = Intervals::spread(start_time, timestamps, values);
    state::classify(&intervals, values)
}

/// Validated spread reconstruction, one interval per sample.
///
/// The trailing window span is not included.
pub fn spread_intervals(
    start_time: i64,
    end_time: i64,
    timestamps: &[i64],
    values: &[i64],
) -> Result<Intervals> {
    validate(start_time, end_time, timestamps, values, None)?;
    Ok(Intervals::spread(start_time, timestamps, values))
}
