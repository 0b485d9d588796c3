use std::io::Write;
use std::sync::Mutex;

use tracing::warn;

use crate::render::view::{BalanceView, Direction, GridView, SelectorButton, SelectorView};

/// Where render models end up. Rendering never fails from the dashboard's
/// point of view; sinks deal with their own I/O errors.
pub trait DisplaySink: Send + Sync {
    fn render_grid(&self, grid: &GridView);
    fn render_balance(&self, balance: &BalanceView);
    fn render_selector(&self, selector: &SelectorView);
}

/// Writes each render as plain text lines.
pub struct TextSink<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    fn write_block(&self, block: &str) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(err) = out.write_all(block.as_bytes()).and_then(|()| out.flush()) {
            warn!(error = %err, "failed to write to display");
        }
    }
}

impl<W: Write + Send> DisplaySink for TextSink<W> {
    fn render_grid(&self, grid: &GridView) {
        let block = match grid {
            GridView::Loading => "[prices] loading...\n".to_string(),
            GridView::Error(message) => format!("[prices] {message}\n"),
            GridView::Cards(cards) => {
                let mut block = String::from("[prices]\n");
                for card in cards {
                    let marker = match card.direction {
                        Direction::Up => '+',
                        Direction::Down => '-',
                    };
                    block.push_str(&format!(
                        "  {marker} {:<5} {:<13} {:>12}  {:<10} {}\n",
                        card.symbol, card.name, card.price, card.change, card.chart_symbol
                    ));
                }
                block
            }
        };
        self.write_block(&block);
    }

    fn render_balance(&self, balance: &BalanceView) {
        self.write_block(&format!(
            "[balance] total {}  pnl {} {}\n",
            balance.total,
            balance.pnl,
            balance.pnl_direction.arrow()
        ));
    }

    fn render_selector(&self, selector: &SelectorView) {
        let row = |buttons: &[SelectorButton]| {
            buttons
                .iter()
                .map(|b| if b.active { format!("[{}]", b.label) } else { b.label.to_string() })
                .collect::<Vec<_>>()
                .join(" ")
        };
        self.write_block(&format!(
            "[chart] {}\n[chart] {}\n",
            row(selector.symbols.as_slice()),
            row(selector.timeframes.as_slice())
        ));
    }
}
