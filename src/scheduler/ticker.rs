use async_trait::async_trait;
use tokio::time::{Duration, Instant, Interval, MissedTickBehavior, interval, interval_at};

use super::traits::Ticker;

/// Fixed-period ticker on the tokio clock.
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    /// First tick fires right away.
    pub fn immediate(period: Duration) -> Self {
        Self::from_interval(interval(period))
    }

    /// First tick fires one `period` from now.
    pub fn delayed(period: Duration) -> Self {
        Self::from_interval(interval_at(Instant::now() + period, period))
    }

    fn from_interval(mut interval: Interval) -> Self {
        // a stalled runtime must not produce a burst of catch-up ticks
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

/// Ticker fired by hand through its paired sender. Ends when every sender is
/// dropped.
#[cfg(test)]
pub struct ManualTicker {
    rx: tokio::sync::mpsc::UnboundedReceiver<()>,
}

#[cfg(test)]
impl ManualTicker {
    pub fn channel() -> (tokio::sync::mpsc::UnboundedSender<()>, Self) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

#[cfg(test)]
#[async_trait]
impl Ticker for ManualTicker {
    async fn tick(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn immediate_fires_at_start_then_every_period() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::immediate(Duration::from_secs(10));

        assert!(ticker.tick().await);
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert!(ticker.tick().await);
        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_waits_one_period() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::delayed(Duration::from_secs(5));

        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn manual_ticker_ends_when_sender_dropped() {
        let (tx, mut ticker) = ManualTicker::channel();
        tx.send(()).unwrap();
        drop(tx);

        assert!(ticker.tick().await);
        assert!(!ticker.tick().await);
    }
}
