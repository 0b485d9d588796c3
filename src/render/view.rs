use crate::market_data::types::Asset;
use crate::render::format::{format_change, format_price, format_signed_usd, format_usd};
use crate::state::PriceView;
use crate::state::balance::SimulatedBalance;
use crate::state::chart::{CHART_SYMBOLS, ChartSelection, TIMEFRAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "↗",
            Direction::Down => "↘",
        }
    }
}

/// One tile in the price grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: String,
    pub change: String,
    pub direction: Direction,
    /// Chart pair selected when this card is picked.
    pub chart_symbol: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Loading,
    Cards(Vec<CardView>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceView {
    pub total: String,
    pub pnl: String,
    pub pnl_direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorButton {
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub symbols: Vec<SelectorButton>,
    pub timeframes: Vec<SelectorButton>,
}

pub fn card_view(asset: &Asset, usd: f64, change: Option<f64>) -> CardView {
    let (change, direction) = match change {
        Some(pct) if pct < 0.0 => (format!("{} {}", Direction::Down.arrow(), format_change(pct)), Direction::Down),
        Some(pct) => (format!("{} {}", Direction::Up.arrow(), format_change(pct)), Direction::Up),
        // a missing change counts as non-negative
        None => (format!("{} N/A", Direction::Up.arrow()), Direction::Up),
    };

    CardView {
        symbol: asset.symbol,
        name: asset.name,
        price: format!("${}", format_price(usd)),
        change,
        direction,
        chart_symbol: asset.chart_symbol(),
    }
}

/// Cards follow catalog order; assets missing from the snapshot are skipped.
pub fn grid_view(catalog: &[Asset], prices: &PriceView) -> GridView {
    match prices {
        PriceView::Loading => GridView::Loading,
        PriceView::Failed(message) => GridView::Error(message.clone()),
        PriceView::Loaded(snapshot) => GridView::Cards(
            catalog
                .iter()
                .filter_map(|asset| {
                    let quote = snapshot.get(asset.id)?;
                    Some(card_view(asset, quote.usd, quote.usd_24h_change))
                })
                .collect(),
        ),
    }
}

pub fn balance_view(balance: &SimulatedBalance) -> BalanceView {
    let pnl_direction = if balance.pnl.is_sign_negative() && !balance.pnl.is_zero() {
        Direction::Down
    } else {
        Direction::Up
    };

    BalanceView {
        total: format_usd(balance.total),
        pnl: format_signed_usd(balance.pnl),
        pnl_direction,
    }
}

pub fn selector_view(selection: &ChartSelection) -> SelectorView {
    let active_symbol = selection.symbol();
    let active_timeframe = selection.timeframe();

    SelectorView {
        symbols: CHART_SYMBOLS
            .iter()
            .map(|s| SelectorButton {
                label: s.label,
                active: *s == active_symbol,
            })
            .collect(),
        timeframes: TIMEFRAMES
            .iter()
            .map(|t| SelectorButton {
                label: t.label,
                active: *t == active_timeframe,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::types::DEFAULT_ASSETS;
    use crate::state::price_snapshot::PriceSnapshot;
    use crate::state::quote::PriceQuote;
    use rust_decimal::Decimal;

    fn snapshot(entries: &[(&str, f64, Option<f64>)]) -> PriceSnapshot {
        let ids: Vec<&str> = DEFAULT_ASSETS.iter().map(|a| a.id).collect();
        PriceSnapshot::from_quotes(
            &ids,
            entries.iter().map(|(id, usd, change)| {
                (id.to_string(), PriceQuote { usd: *usd, usd_24h_change: *change })
            }),
        )
    }

    #[test]
    fn cards_follow_catalog_order_and_skip_missing() {
        let prices = PriceView::Loaded(snapshot(&[
            ("polkadot", 7.25, Some(-0.4)),
            ("bitcoin", 67_000.0, Some(1.5)),
        ]));

        let GridView::Cards(cards) = grid_view(&DEFAULT_ASSETS, &prices) else {
            panic!("expected cards");
        };

        let symbols: Vec<&str> = cards.iter().map(|c| c.symbol).collect();
        assert_eq!(symbols, vec!["BTC", "DOT"]);
        assert_eq!(cards[0].price, "$67,000");
        assert_eq!(cards[0].change, "↗ 1.50%");
        assert_eq!(cards[1].change, "↘ 0.40%");
        assert_eq!(cards[1].direction, Direction::Down);
        assert_eq!(cards[1].chart_symbol, "BINANCE:DOTUSDT");
    }

    #[test]
    fn missing_change_renders_na() {
        let card = card_view(&DEFAULT_ASSETS[4], 0.1234, None);
        assert_eq!(card.price, "$0.1234");
        assert_eq!(card.change, "↗ N/A");
        assert_eq!(card.direction, Direction::Up);
    }

    #[test]
    fn failure_renders_message_only() {
        let grid = grid_view(&DEFAULT_ASSETS, &PriceView::Failed("Failed to load prices".into()));
        assert_eq!(grid, GridView::Error("Failed to load prices".into()));
        assert_eq!(grid_view(&DEFAULT_ASSETS, &PriceView::Loading), GridView::Loading);
    }

    #[test]
    fn balance_signs() {
        let up = balance_view(&SimulatedBalance {
            total: Decimal::new(2_168_355, 2),
            pnl: Decimal::new(1_168_355, 2),
        });
        assert_eq!(up.total, "$21683.55");
        assert_eq!(up.pnl, "+$11683.55");
        assert_eq!(up.pnl_direction, Direction::Up);

        let down = balance_view(&SimulatedBalance {
            total: Decimal::new(9_988, 0),
            pnl: Decimal::new(-12, 0),
        });
        assert_eq!(down.pnl, "-$12.00");
        assert_eq!(down.pnl_direction, Direction::Down);
    }

    #[test]
    fn selector_flags_exactly_one_active_button_per_row() {
        let mut selection = ChartSelection::default();
        selection.set_timeframe("1D").unwrap();

        let view = selector_view(&selection);
        let active: Vec<&str> = view.symbols.iter().filter(|b| b.active).map(|b| b.label).collect();
        assert_eq!(active, vec!["BTC/USDT"]);
        let active: Vec<&str> = view.timeframes.iter().filter(|b| b.active).map(|b| b.label).collect();
        assert_eq!(active, vec!["1D"]);
    }
}
