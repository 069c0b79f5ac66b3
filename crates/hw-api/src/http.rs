use std::{sync::Arc, time::Duration, time::Instant};

use axum::{
    Router,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
};
use hw_probe::{CancellationToken, ProbeContext, ProbeConfig, Prober};
use hw_prometheus::{CONTENT_TYPE, ProbeGauges, Registry, render};
use tracing::{info, warn};

use crate::error::ApiError;

/// HTTP API service builder.
pub struct HttpApi<P> {
    prober: Arc<P>,
    timeout: Duration,
    shutdown: CancellationToken,
}

struct ProbeState<P> {
    prober: Arc<P>,
    timeout: Duration,
    shutdown: CancellationToken,
}

impl<P> HttpApi<P>
where
    P: Prober,
{
    /// Create new HTTP API probing devices with `prober`.
    pub fn new(prober: Arc<P>) -> Self {
        Self {
            prober,
            timeout: ProbeConfig::default().timeout(),
            shutdown: CancellationToken::new(),
        }
    }

    /// Upper bound for a single scrape.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parent token of every scrape context; canceling it aborts in-flight probes.
    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET /probe?target=<host[:port]> - Probe a P1 meter
    pub fn router(self) -> Router {
        let state = Arc::new(ProbeState {
            prober: self.prober,
            timeout: self.timeout,
            shutdown: self.shutdown,
        });

        Router::new()
            .route("/probe", get(probe::<P>))
            .with_state(state)
    }
}

/// Value of the first `key` pair; repeated keys resolve to their first value.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// GET /probe
///
/// Always answers 200 once `target` is present; the outcome is reported
/// through `probe_success`.
async fn probe<P>(
    State(state): State<Arc<ProbeState<P>>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError>
where
    P: Prober,
{
    let target = first_param(&params, "target")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::InvalidRequest("Target parameter is missing".into()))?;

    let ctx = ProbeContext::new(&state.shutdown, state.timeout);
    let _abort = ctx.cancel_on_drop();

    let registry = Registry::new();
    let meta = ProbeGauges::register(&registry)?;

    let started = Instant::now();
    let success = state.prober.probe(&ctx, target, &registry).await;
    let elapsed = started.elapsed();
    meta.record(success, elapsed);

    let duration_s = elapsed.as_secs_f64();
    if success {
        info!(device = %target, duration_s, "probe succeeded");
    } else {
        warn!(device = %target, duration_s, "probe failed");
    }

    let body = render(&registry)?;
    Ok(([(header::CONTENT_TYPE, CONTENT_TYPE)], body))
}
