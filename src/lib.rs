//! # slawatch
//!
//! SLA availability calculations for irregularly sampled uptime telemetry.
//!
//! Given an evaluation window and a series of timestamped cumulative uptime
//! counter readings (for example a device's uptime as polled over SNMP),
//! this crate derives what fraction of the window the device was up under
//! four accounting policies, and can label every sample as up, down or open.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ┌─────────┐    ┌────────────┐    ┌────────┐    ┌─────────┐  │
//! │  │ source  │───▶│ calculator │───▶│ report │───▶│   CLI   │  │
//! │  │ (input) │    │   (core)   │    │        │    │ (main)  │  │
//! │  └─────────┘    └────────────┘    └────────┘    └─────────┘  │
//! │       ▲                                              │       │
//! │       └──────────── FileSource | StaticSource ◀──────┘       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`calculator`]**: validation, interval reconstruction and the four
//!   availability policies plus the state classifier. Pure functions.
//! - **[`report`]**: every policy for one series in a serializable report
//! - **[`source`]**: the [`SeriesSource`] trait and JSON file loading
//! - **[`settings`]**: layered configuration for the CLI
//!
//! ## Policies
//!
//! | Policy | Question answered |
//! |--------|-------------------|
//! | Connectivity | Was the monitoring connection up? |
//! | Uptime | Was the device itself up? |
//! | Device-aware (SLA 1) | Was the device reachable whenever it was up? |
//! | Exception-aware (SLA 2) | As SLA 1, with maintenance windows forgiven |
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! slawatch --file demos/reference_series.json
//! slawatch --file series.json --policy device-aware --precision 3
//! slawatch --file series.json --export report.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use slawatch::{calculator, AvailabilityReport, UptimeSeries, Window};
//!
//! let timestamps = [10, 20, 30, 40];
//! let values = [10, 20, 0, 30];
//!
//! // The jump to 30 proves the device stayed up through the missing reading.
//! assert_eq!(calculator::uptime_availability(0, 40, &timestamps, &values)?, 1.0);
//! assert_eq!(calculator::policy1_availability(0, 40, &timestamps, &values)?, 0.75);
//!
//! let series = UptimeSeries::builder().readings(&timestamps, &values).build();
//! let report = AvailabilityReport::compute(&Window::new(0, 40), &series)?;
//! assert_eq!(report.device_aware, 0.75);
//! # Ok::<(), slawatch::InvalidArgument>(())
//! ```

pub mod calculator;
pub mod error;
pub mod report;
pub mod settings;
pub mod source;

// Re-export main types for convenience
pub use calculator::{
    connectivity_availability, policy1_availability, policy2_availability, state_series,
    uptime_availability, validate, Intervals,
};
pub use error::{InvalidArgument, Result};
pub use report::AvailabilityReport;
pub use settings::Settings;
pub use source::{FileSource, SeriesDocument, SeriesSource, StaticSource};

pub use slawatch_types::{
    AvailabilityPolicy, Sample, SchemaVersion, UptimeSeries, UptimeState, Window,
};
