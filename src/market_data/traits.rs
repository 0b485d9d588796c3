use async_trait::async_trait;
use thiserror::Error;

use crate::state::price_snapshot::PriceSnapshot;

/// Any failure to obtain a snapshot. The dashboard treats every variant the
/// same way; the split only exists for logs and metrics.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("price API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Label used for the `outcome` metric.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Http(_) => "http_error",
            FetchError::Status(_) => "bad_status",
            FetchError::Decode(_) => "decode_error",
        }
    }
}

/// A place prices come from.
///
/// One call is one request; implementations must not retry.
#[async_trait]
pub trait PriceSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch USD quotes for `ids`. The returned snapshot only ever contains
    /// ids from `ids`.
    async fn fetch(&self, ids: &[&str]) -> Result<PriceSnapshot, FetchError>;
}
