use std::time::Duration;

/// Path of the meter's data endpoint.
pub const DATA_PATH: &str = "/api/v1/data";

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Upper bound for one probe (default: 5 seconds).
    ///
    /// Used both for the scrape context and as the HTTP client timeout;
    /// whichever deadline expires first aborts the request.
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { timeout_ms: 5_000 }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("probe timeout must be greater than zero".into());
        }
        Ok(())
    }
}

/// URL of the data endpoint for `target` (`host` or `host:port`).
pub(crate) fn data_url(target: &str) -> String {
    format!("http://{target}{DATA_PATH}")
}
