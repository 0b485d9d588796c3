pub mod ticker;
pub mod traits;

use std::sync::{Arc, Mutex};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::market_data::traits::PriceSource;
use crate::market_data::types::Asset;
use crate::metrics::prometheus as telemetry;
use crate::render::DisplaySink;
use crate::render::view::{balance_view, grid_view, selector_view};
use crate::state::balance::BalanceSimulator;
use crate::state::chart::SelectionError;
use crate::state::{self, DashboardHandle, PriceView};
use traits::Ticker;

/// Message shown in place of the grid when a refresh fails.
pub const PRICE_ERROR_MESSAGE: &str = "Failed to load prices";

/// Everything a refresh needs: where prices come from, what to ask for,
/// the state to update and the sink to render into.
///
/// Cheap to clone; every clone shares the same state and sink.
#[derive(Clone)]
pub struct Dashboard {
    source: Arc<dyn PriceSource>,
    catalog: Arc<[Asset]>,
    state: DashboardHandle,
    sink: Arc<dyn DisplaySink>,
    balance: Arc<Mutex<BalanceSimulator>>,
}

impl Dashboard {
    pub fn new(
        source: Arc<dyn PriceSource>,
        catalog: Vec<Asset>,
        sink: Arc<dyn DisplaySink>,
        simulator: BalanceSimulator,
    ) -> Self {
        Self {
            source,
            catalog: catalog.into(),
            state: state::new_handle(),
            sink,
            balance: Arc::new(Mutex::new(simulator)),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &DashboardHandle {
        &self.state
    }

    /// One fetch for the whole catalog. Success replaces the snapshot,
    /// failure replaces it with the error message. Never retries.
    pub async fn refresh_prices(&self) {
        let ids: Vec<&str> = self.catalog.iter().map(|asset| asset.id).collect();
        let source = self.source.name();

        let started = Instant::now();
        let result = self.source.fetch(&ids).await;
        telemetry::record_price_fetch_latency(source, started.elapsed().as_secs_f64() * 1_000.0);

        let view = match result {
            Ok(snapshot) => {
                if snapshot.is_empty() {
                    warn!(source, "price response held none of the requested assets");
                }
                debug!(source, assets = ?snapshot.ids(), "prices refreshed");
                telemetry::record_price_fetch(source, "ok");
                telemetry::record_snapshot_size(snapshot.len());
                PriceView::Loaded(snapshot)
            }
            Err(err) => {
                warn!(source, error = %err, "price refresh failed");
                telemetry::record_price_fetch(source, err.kind());
                PriceView::Failed(PRICE_ERROR_MESSAGE.to_string())
            }
        };

        // render under the guard so the display always shows what the state holds
        let mut state = self.state.write().await;
        state.prices = view;
        self.sink.render_grid(&grid_view(&self.catalog, &state.prices));
    }

    pub async fn refresh_balance(&self) {
        let balance = {
            let mut simulator = self.balance.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            simulator.tick()
        };
        telemetry::record_balance_tick();
        debug!(total = %balance.total, pnl = %balance.pnl, "balance simulated");

        let mut state = self.state.write().await;
        let stored = state.balance.insert(balance);
        self.sink.render_balance(&balance_view(stored));
    }

    pub async fn render_selector(&self) {
        let selector = {
            let state = self.state.read().await;
            selector_view(&state.chart)
        };
        self.sink.render_selector(&selector);
    }

    pub async fn select_symbol(&self, symbol: &str) -> Result<(), SelectionError> {
        let selector = {
            let mut state = self.state.write().await;
            state.chart.set_symbol(symbol)?;
            info!(symbol = state.chart.symbol().symbol, "chart symbol selected");
            selector_view(&state.chart)
        };
        self.sink.render_selector(&selector);
        Ok(())
    }

    pub async fn select_timeframe(&self, timeframe: &str) -> Result<(), SelectionError> {
        let selector = {
            let mut state = self.state.write().await;
            state.chart.set_timeframe(timeframe)?;
            info!(timeframe = state.chart.timeframe().label, "chart timeframe selected");
            selector_view(&state.chart)
        };
        self.sink.render_selector(&selector);
        Ok(())
    }
}

/// Fires a price refresh per tick. Each refresh runs as its own task, so a
/// slow response may still be in flight when the next tick fires; whichever
/// finishes last wins.
pub async fn run_price_loop<T: Ticker>(mut ticker: T, dashboard: Dashboard) -> anyhow::Result<()> {
    info!(assets = dashboard.catalog.len(), "price loop started");

    while ticker.tick().await {
        let dashboard = dashboard.clone();
        tokio::spawn(async move {
            dashboard.refresh_prices().await;
        });
    }

    info!("price ticker closed, price loop shutting down");
    Ok(())
}

pub async fn run_balance_loop<T: Ticker>(mut ticker: T, dashboard: Dashboard) -> anyhow::Result<()> {
    info!("balance loop started");

    while ticker.tick().await {
        dashboard.refresh_balance().await;
    }

    info!("balance ticker closed, balance loop shutting down");
    Ok(())
}
