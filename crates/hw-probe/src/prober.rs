use async_trait::async_trait;
use hw_model::DeviceStatus;
use hw_prometheus::{DeviceGauges, Registry};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::{
    config::{ProbeConfig, data_url},
    context::ProbeContext,
    error::ProbeError,
};

/// Fills a scrape registry with device metrics.
///
/// Implementations register their gauges against `registry` before doing
/// any I/O so the exposed metric set does not depend on the outcome.
#[async_trait]
pub trait Prober: Send + Sync + 'static {
    /// Probe `target` once. Returns `true` when the device gauges hold fresh values.
    async fn probe(&self, ctx: &ProbeContext, target: &str, registry: &Registry) -> bool;
}

/// Prober for the HomeWizard P1 meter local API.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ProbeError::Client)?;
        Ok(Self { client })
    }

    async fn fetch(&self, target: &str) -> Result<DeviceStatus, ProbeError> {
        let url = data_url(target);
        debug!(%url, "querying device");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProbeError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, ctx: &ProbeContext, target: &str, registry: &Registry) -> bool {
        let gauges = match DeviceGauges::register(registry) {
            Ok(gauges) => gauges,
            Err(e) => {
                warn!(device = %target, error = %e, "failed to register device gauges");
                return false;
            }
        };

        match ctx.run(self.fetch(target)).await {
            Ok(status) => {
                gauges.apply(&status);
                true
            }
            Err(e @ ProbeError::Decode(_)) => {
                warn!(device = %target, error = %e, "failed to decode data from homewizard target");
                false
            }
            Err(e) => {
                warn!(device = %target, error = %e, "failed to query homewizard target");
                false
            }
        }
    }
}
