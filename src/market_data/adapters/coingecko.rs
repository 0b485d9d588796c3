use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::market_data::traits::{FetchError, PriceSource};
use crate::state::price_snapshot::PriceSnapshot;
use crate::state::quote::PriceQuote;

const VS_CURRENCY: &str = "usd";

/// Client for CoinGecko's `/simple/price` endpoint.
pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
}

/// Per-asset entry of the `/simple/price` body. `usd` is optional so a
/// malformed entry drops that asset instead of failing the whole response.
#[derive(Debug, Deserialize)]
struct SimplePriceEntry {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
}

impl CoinGeckoClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn price_url(&self) -> String {
        format!("{}/simple/price", self.base_url)
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    async fn fetch(&self, ids: &[&str]) -> Result<PriceSnapshot, FetchError> {
        let joined = ids.join(",");

        let response = self
            .http
            .get(self.price_url())
            .query(&[
                ("ids", joined.as_str()),
                ("vs_currencies", VS_CURRENCY),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "price response received");

        parse_simple_price(&body, ids)
    }
}

/// Decode a `/simple/price` body into a snapshot restricted to `requested`.
pub fn parse_simple_price(body: &[u8], requested: &[&str]) -> Result<PriceSnapshot, FetchError> {
    let entries: HashMap<String, SimplePriceEntry> = serde_json::from_slice(body)?;

    let quotes = entries.into_iter().filter_map(|(id, entry)| {
        let usd = entry.usd?;
        Some((
            id,
            PriceQuote {
                usd,
                usd_24h_change: entry.usd_24h_change,
            },
        ))
    });

    Ok(PriceSnapshot::from_quotes(requested, quotes))
}
