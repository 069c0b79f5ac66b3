use std::time::Duration;

use prometheus::{Gauge, Registry};

use crate::{error::MetricsError, gauge::register_gauge};

/// `probe_success` and `probe_duration_seconds` for one scrape.
pub struct ProbeGauges {
    success: Gauge,
    duration: Gauge,
}

impl ProbeGauges {
    pub fn register(registry: &Registry) -> Result<Self, MetricsError> {
        let success = register_gauge(
            registry,
            "probe_success",
            "Displays whether or not the probe was a success",
        )?;
        let duration = register_gauge(
            registry,
            "probe_duration_seconds",
            "Returns how long the probe took to complete in seconds",
        )?;
        Ok(Self { success, duration })
    }

    /// Record the outcome; a failed probe leaves `probe_success` at 0.
    pub fn record(&self, success: bool, elapsed: Duration) {
        self.duration.set(elapsed.as_secs_f64());
        if success {
            self.success.set(1.0);
        }
    }

    #[cfg(test)]
    fn success(&self) -> f64 {
        self.success.get()
    }

    #[cfg(test)]
    fn duration_seconds(&self) -> f64 {
        self.duration.get()
    }
}
