//! Wire types of the HomeWizard P1 meter local API (`GET /api/v1/data`).

mod status;
pub use status::{DeviceStatus, ExternalReading};
