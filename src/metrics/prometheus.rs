use std::net::SocketAddr;

use ::metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus HTTP exporter on `addr`.
/// After this call, any metrics recorded via the `metrics` crate
/// macros (counter!, histogram!) are automatically exported at /metrics.
pub fn init_metrics_server(addr: SocketAddr) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    Ok(())
}

// ── Price fetch metrics ──────────────────────────────────────────

pub fn record_price_fetch(source: &str, outcome: &'static str) {
    counter!("price_fetch_total", "source" => source.to_string(), "outcome" => outcome)
        .increment(1);
}

pub fn record_price_fetch_latency(source: &str, latency_ms: f64) {
    histogram!("price_fetch_latency_ms", "source" => source.to_string())
        .record(latency_ms);
}

pub fn record_snapshot_size(assets: usize) {
    histogram!("price_snapshot_assets").record(assets as f64);
}

// ── Balance metrics ──────────────────────────────────────────────

pub fn record_balance_tick() {
    counter!("balance_ticks_total").increment(1);
}
