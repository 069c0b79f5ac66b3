use prometheus::{Encoder, Registry, TextEncoder};

use crate::error::MetricsError;

/// `Content-Type` of the text exposition format.
pub const CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

/// Encode everything in `registry` in the text exposition format.
pub fn render(registry: &Registry) -> Result<String, MetricsError> {
    let encoder = TextEncoder::new();
    debug_assert_eq!(encoder.format_type(), CONTENT_TYPE);

    encoder
        .encode_to_string(&registry.gather())
        .map_err(MetricsError::Encode)
}
