pub mod balance;
pub mod chart;
pub mod price_snapshot;
pub mod quote;

use std::sync::Arc;
use tokio::sync::RwLock;

use balance::SimulatedBalance;
use chart::ChartSelection;
use price_snapshot::PriceSnapshot;

/// What the price grid currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PriceView {
    #[default]
    Loading,
    Loaded(PriceSnapshot),
    /// A failed refresh discards the previous snapshot.
    Failed(String),
}

/// Everything the display is rendered from.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub prices: PriceView,
    pub balance: Option<SimulatedBalance>,
    pub chart: ChartSelection,
}

pub type DashboardHandle = Arc<RwLock<DashboardState>>;

pub fn new_handle() -> DashboardHandle {
    Arc::new(RwLock::new(DashboardState::default()))
}
