/// Latest USD quote for one asset. Stores only what the grid renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceQuote {
    pub usd: f64,
    /// Signed percent change over 24h; the API may omit it.
    pub usd_24h_change: Option<f64>,
}
