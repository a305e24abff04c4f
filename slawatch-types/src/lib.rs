//! # slawatch-types
//!
//! Core types for uptime telemetry. This crate defines the shape of the data
//! that availability calculations consume: timestamped cumulative uptime
//! counter samples, the window they are evaluated over, and the labels used
//! to classify each sample.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable `serde` and/or `minicbor` features as needed
//! - **Unit agnostic**: Timestamps and counters are plain integers in caller-defined units
//! - **Versioned schema**: Serialized documents carry version info for forward compatibility
//! - **Ergonomic builders**: Fluent API for constructing series
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: JSON/MessagePack/etc. serialization via serde
//! - `minicbor`: Compact binary serialization via CBOR
//! - `all`: Enable all serialization formats
//!
//! ## Example
//!
//! ```rust
//! use slawatch_types::{UptimeSeries, Window};
//!
//! let series = UptimeSeries::builder()
//!     .sample(10100, 0)
//!     .sample(10200, 70)
//!     .sample(10300, 170)
//!     .exception(10400, 0)
//!     .build();
//!
//! let window = Window::new(10000, 10500);
//!
//! assert_eq!(series.len(), 4);
//! assert_eq!(series.timestamps(), vec![10100, 10200, 10300, 10400]);
//! assert_eq!(window.span(), 500);
//! ```
//!
//! ## Schema Version
//!
//! The current schema version is **1**. The version is included in serialized
//! documents to allow consumers to handle format evolution gracefully.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod policy;
mod sample;
mod state;
mod version;
mod window;

pub use policy::*;
pub use sample::*;
pub use state::*;
pub use version::*;
pub use window::*;

/// Current schema version.
///
/// Increment this when making breaking changes to the series document format.
pub const SCHEMA_VERSION: u32 = 1;
