use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::market_data::types::{Asset, DEFAULT_ASSETS};
use crate::scheduler::Dashboard;

/// A line typed on the control input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `symbol BINANCE:ETHUSDT`, `symbol ETH/USDT` or the ticker alone, `symbol eth`.
    Symbol(String),
    /// `timeframe 240` or `timeframe 4H`.
    Timeframe(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?;
    let arg = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    match verb.to_ascii_lowercase().as_str() {
        "symbol" | "s" => Some(Command::Symbol(expand_symbol(arg))),
        "timeframe" | "tf" => Some(Command::Timeframe(arg.to_string())),
        _ => None,
    }
}

/// A bare ticker of a tracked asset maps to the pair its price card opens.
/// Anything else is passed through for the selection to validate.
fn expand_symbol(arg: &str) -> String {
    DEFAULT_ASSETS
        .iter()
        .find(|asset| asset.symbol.eq_ignore_ascii_case(arg))
        .map_or_else(|| arg.to_string(), Asset::chart_symbol)
}

/// Applies control lines to the dashboard until the input closes.
pub async fn run_command_loop<R>(input: R, dashboard: Dashboard) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let result = match parse_command(&line) {
            Some(Command::Symbol(symbol)) => dashboard.select_symbol(&symbol).await,
            Some(Command::Timeframe(timeframe)) => dashboard.select_timeframe(&timeframe).await,
            None => {
                warn!(line = %line.trim(), "unrecognised command");
                continue;
            }
        };

        if let Err(err) = result {
            warn!(error = %err, "command rejected");
        }
    }

    info!("control input closed");
    Ok(())
}
