use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("probe canceled")]
    Canceled,

    #[error("probe deadline exceeded")]
    DeadlineExceeded,

    #[error(transparent)]
    Metrics(#[from] hw_prometheus::MetricsError),
}
