//! Logging setup for the homewizard exporter.
//!
//! Wraps `tracing-subscriber` so the binary picks an output format
//! (`text`, `json` or `journald`) and a filter directive at startup.

mod logger;
pub use logger::*;
