use prometheus::{Gauge, Opts, Registry};

use crate::error::MetricsError;

/// Create a gauge and attach it to `registry`.
pub(crate) fn register_gauge(
    registry: &Registry,
    name: &'static str,
    help: &'static str,
) -> Result<Gauge, MetricsError> {
    let as_err = |source| MetricsError::Register { name, source };

    let gauge = Gauge::with_opts(Opts::new(name, help)).map_err(as_err)?;
    registry.register(Box::new(gauge.clone())).map_err(as_err)?;
    Ok(gauge)
}
