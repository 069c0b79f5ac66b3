//! Device side of a scrape: fetch `/api/v1/data` from a P1 meter and fill
//! the device gauges of the scrape's registry.

mod config;
pub use config::{DATA_PATH, ProbeConfig};

mod context;
pub use context::ProbeContext;

mod error;
pub use error::ProbeError;

mod prober;
pub use prober::{HttpProber, Prober};

pub use tokio_util::sync::CancellationToken;
