use hw_observe::{LoggerConfig, LoggerError, LoggerFormat};
use hw_probe::ProbeConfig;
use thiserror::Error;

pub const LISTEN_ADDR_ENV: &str = "HOMEWIZARD_EXPORTER_LISTEN_ADDR";
pub const LOG_LEVEL_ENV: &str = "HOMEWIZARD_EXPORTER_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "HOMEWIZARD_EXPORTER_LOG_FORMAT";
pub const PROBE_TIMEOUT_ENV: &str = "HOMEWIZARD_EXPORTER_PROBE_TIMEOUT_MS";

const DEFAULT_LISTEN_ADDR: &str = ":9090";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOMEWIZARD_EXPORTER_LOG_FORMAT: {0}")]
    Logger(#[from] LoggerError),
    #[error("HOMEWIZARD_EXPORTER_PROBE_TIMEOUT_MS: expected milliseconds, got '{0}'")]
    InvalidTimeout(String),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Address handed to the listener, `host:port`.
    pub listen_addr: String,
    pub logger: LoggerConfig,
    pub probe: ProbeConfig,
}

impl ExporterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr =
            normalize_listen_addr(&get(LISTEN_ADDR_ENV).unwrap_or(DEFAULT_LISTEN_ADDR.into()));

        let mut logger = LoggerConfig::default();
        if let Some(level) = get(LOG_LEVEL_ENV) {
            logger.level = level;
        }
        if let Some(format) = get(LOG_FORMAT_ENV) {
            logger.format = format.parse::<LoggerFormat>()?;
        }

        let mut probe = ProbeConfig::default();
        if let Some(raw) = get(PROBE_TIMEOUT_ENV) {
            probe.timeout_ms = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
        }
        probe.validate().map_err(ConfigError::Invalid)?;

        Ok(Self {
            listen_addr,
            logger,
            probe,
        })
    }
}

/// `:9090` listens on every interface, IPv6 and IPv4 alike (`[::]:9090`).
fn normalize_listen_addr(addr: &str) -> String {
    let addr = addr.trim();
    match addr.strip_prefix(':') {
        Some(port) => format!("[::]:{port}"),
        None => addr.to_string(),
    }
}
