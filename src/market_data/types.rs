/// One tracked asset. `id` is the price API identifier, `symbol` the ticker
/// shown on the card and used to build the chart pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub id: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

impl Asset {
    pub const fn new(id: &'static str, symbol: &'static str, name: &'static str) -> Self {
        Self { id, symbol, name }
    }

    /// Chart pair opened when the asset's card is selected.
    pub fn chart_symbol(&self) -> String {
        format!("BINANCE:{}USDT", self.symbol)
    }
}

/// Display order of the price grid.
pub const DEFAULT_ASSETS: [Asset; 8] = [
    Asset::new("bitcoin", "BTC", "Bitcoin"),
    Asset::new("ethereum", "ETH", "Ethereum"),
    Asset::new("solana", "SOL", "Solana"),
    Asset::new("binancecoin", "BNB", "Binance Coin"),
    Asset::new("dogecoin", "DOGE", "Dogecoin"),
    Asset::new("ripple", "XRP", "XRP"),
    Asset::new("cardano", "ADA", "Cardano"),
    Asset::new("polkadot", "DOT", "Polkadot"),
];
