use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("failed to register gauge {name}: {source}")]
    Register {
        name: &'static str,
        #[source]
        source: prometheus::Error,
    },
    #[error("failed to encode metrics: {0}")]
    Encode(#[source] prometheus::Error),
}
