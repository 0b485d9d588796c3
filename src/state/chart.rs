use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSymbol {
    pub symbol: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeframe {
    pub value: &'static str,
    pub label: &'static str,
}

pub const CHART_SYMBOLS: [ChartSymbol; 8] = [
    ChartSymbol { symbol: "BINANCE:BTCUSDT", label: "BTC/USDT" },
    ChartSymbol { symbol: "BINANCE:ETHUSDT", label: "ETH/USDT" },
    ChartSymbol { symbol: "BINANCE:SOLUSDT", label: "SOL/USDT" },
    ChartSymbol { symbol: "BINANCE:BNBUSDT", label: "BNB/USDT" },
    ChartSymbol { symbol: "BINANCE:DOGEUSDT", label: "DOGE/USDT" },
    ChartSymbol { symbol: "BINANCE:XRPUSDT", label: "XRP/USDT" },
    ChartSymbol { symbol: "BINANCE:ADAUSDT", label: "ADA/USDT" },
    ChartSymbol { symbol: "BINANCE:DOTUSDT", label: "DOT/USDT" },
];

pub const TIMEFRAMES: [Timeframe; 8] = [
    Timeframe { value: "1", label: "1m" },
    Timeframe { value: "5", label: "5m" },
    Timeframe { value: "15", label: "15m" },
    Timeframe { value: "30", label: "30m" },
    Timeframe { value: "60", label: "1H" },
    Timeframe { value: "240", label: "4H" },
    Timeframe { value: "1D", label: "1D" },
    Timeframe { value: "1W", label: "1W" },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown chart symbol: {0}")]
    UnknownSymbol(String),

    #[error("unknown timeframe: {0}")]
    UnknownTimeframe(String),
}

/// Which pair and timeframe the chart panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSelection {
    symbol: ChartSymbol,
    timeframe: Timeframe,
}

impl Default for ChartSelection {
    fn default() -> Self {
        Self {
            symbol: CHART_SYMBOLS[0],
            timeframe: TIMEFRAMES[4],
        }
    }
}

impl ChartSelection {
    pub fn symbol(&self) -> ChartSymbol {
        self.symbol
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Accepts the exchange symbol (`BINANCE:ETHUSDT`) or its label
    /// (`ETH/USDT`), case-insensitively.
    pub fn set_symbol(&mut self, requested: &str) -> Result<(), SelectionError> {
        let requested = requested.trim();
        let found = CHART_SYMBOLS
            .iter()
            .find(|s| s.symbol.eq_ignore_ascii_case(requested) || s.label.eq_ignore_ascii_case(requested))
            .ok_or_else(|| SelectionError::UnknownSymbol(requested.to_string()))?;

        self.symbol = *found;
        Ok(())
    }

    /// Accepts the widget value (`240`) or its label (`4H`).
    pub fn set_timeframe(&mut self, requested: &str) -> Result<(), SelectionError> {
        let requested = requested.trim();
        let found = TIMEFRAMES
            .iter()
            .find(|t| t.value.eq_ignore_ascii_case(requested) || t.label.eq_ignore_ascii_case(requested))
            .ok_or_else(|| SelectionError::UnknownTimeframe(requested.to_string()))?;

        self.timeframe = *found;
        Ok(())
    }
}
