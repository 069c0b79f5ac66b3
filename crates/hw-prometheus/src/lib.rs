//! Prometheus gauges exported per probe.
//!
//! Every scrape builds its own [`Registry`]: the meta gauges from
//! [`ProbeGauges`], the device gauges from [`DeviceGauges`], then
//! [`render`] turns it into the text exposition body.
//!
//! ## Example
//! ```rust
//! use hw_model::DeviceStatus;
//! use hw_prometheus::{DeviceGauges, ProbeGauges, Registry, render};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Registry::new();
//! let probe = ProbeGauges::register(&registry)?;
//! let device = DeviceGauges::register(&registry)?;
//!
//! device.apply(&DeviceStatus { wifi_strength: -45.0, ..Default::default() });
//! probe.record(true, std::time::Duration::from_millis(12));
//!
//! let body = render(&registry)?;
//! assert!(body.contains("homewizard_wifi_strength_decibels -45"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `probe_success` - 1 when the device answered with a decodable document
//! - `probe_duration_seconds` - wall clock time spent probing
//! - `homewizard_*` - see [`DEVICE_GAUGES`]

mod device;
mod error;
mod gauge;
mod probe;
mod render;

pub use device::{DEVICE_GAUGES, DeviceGauges, GaugeSpec};
pub use error::MetricsError;
pub use probe::ProbeGauges;
pub use render::{CONTENT_TYPE, render};

pub use prometheus::{Gauge, Registry};
