mod config;
mod controls;
mod market_data;
mod metrics;
mod render;
mod scheduler;
mod state;

use std::sync::Arc;

pub use anyhow::Result;
pub use tracing::{info, warn};
use tracing_subscriber::filter::EnvFilter;

use config::Config;
use market_data::adapters::coingecko::CoinGeckoClient;
use market_data::types::DEFAULT_ASSETS;
use render::TextSink;
use scheduler::ticker::IntervalTicker;
use scheduler::{Dashboard, run_balance_loop, run_price_loop};
use state::balance::{BalanceModel, BalanceSimulator};

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_level);

    if let Some(addr) = config.metrics_addr {
        metrics::init_metrics_server(addr)?;
        info!(%addr, "metrics exporter listening");
    }

    info!(
        api = %config.api_base_url,
        price_interval_secs = config.price_interval.as_secs(),
        balance_interval_secs = config.balance_interval.as_secs(),
        "price-dashboard starting"
    );

    let source = Arc::new(CoinGeckoClient::new(config.api_base_url.clone(), config.http_timeout)?);
    let sink = Arc::new(TextSink::new(std::io::stdout()));
    let dashboard = Dashboard::new(
        source,
        DEFAULT_ASSETS.to_vec(),
        sink,
        BalanceSimulator::new(BalanceModel::default()),
    );

    dashboard.render_selector().await;

    let price_handle = tokio::spawn(run_price_loop(
        IntervalTicker::immediate(config.price_interval),
        dashboard.clone(),
    ));
    let balance_handle = tokio::spawn(run_balance_loop(
        IntervalTicker::delayed(config.balance_interval),
        dashboard.clone(),
    ));

    // stdin closing (e.g. running detached) only stops the controls
    tokio::spawn(async move {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        if let Err(err) = controls::run_command_loop(stdin, dashboard).await {
            warn!(error = %err, "control input failed");
        }
    });

    tokio::select! {
        res = price_handle => {
            match res {
                Ok(Ok(())) => warn!("price loop exited"),
                Ok(Err(err)) => warn!(error = %err, "price loop returned error"),
                Err(err) => warn!(error = %err, "price loop task panicked"),
            }
        }
        res = balance_handle => {
            match res {
                Ok(Ok(())) => warn!("balance loop exited"),
                Ok(Err(err)) => warn!(error = %err, "balance loop returned error"),
                Err(err) => warn!(error = %err, "balance loop task panicked"),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("received Ctrl-C, shutting down");
        }
    }

    Ok(())
}
