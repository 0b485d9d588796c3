use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_PRICE_INTERVAL_SECS: u64 = 10;
const DEFAULT_BALANCE_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub api_base_url: String,
    pub price_interval: Duration,
    pub balance_interval: Duration,
    /// `None` leaves price requests without a timeout.
    pub http_timeout: Option<Duration>,
    /// Prometheus exporter listen address; exporter is off when unset.
    pub metrics_addr: Option<SocketAddr>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // dotenvy loads .env, but doesn't override already-set env vars
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be
    /// exercised without mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let api_base_url = lookup("PRICE_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let price_interval = Duration::from_secs(
            parse_secs(&lookup, "PRICE_INTERVAL_SECS")?.unwrap_or(DEFAULT_PRICE_INTERVAL_SECS),
        );
        let balance_interval = Duration::from_secs(
            parse_secs(&lookup, "BALANCE_INTERVAL_SECS")?.unwrap_or(DEFAULT_BALANCE_INTERVAL_SECS),
        );
        let http_timeout = parse_secs(&lookup, "HTTP_TIMEOUT_SECS")?.map(Duration::from_secs);

        let metrics_addr = lookup("METRICS_ADDR")
            .map(|raw| {
                raw.parse::<SocketAddr>()
                    .with_context(|| format!("METRICS_ADDR is not a socket address: {raw}"))
            })
            .transpose()?;

        Ok(Self {
            log_level,
            api_base_url,
            price_interval,
            balance_interval,
            http_timeout,
            metrics_addr,
        })
    }
}

fn parse_secs<F>(lookup: &F, key: &str) -> anyhow::Result<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a whole number of seconds, got {raw:?}"))?;

    // tokio intervals panic on a zero period
    anyhow::ensure!(secs > 0, "{key} must be greater than zero");

    Ok(Some(secs))
}
