use async_trait::async_trait;

/// Source of periodic ticks for a refresh loop.
#[async_trait]
pub trait Ticker: Send {
    /// Waits for the next tick. Returns `false` once no further tick can
    /// ever arrive, which ends the loop driving this ticker.
    async fn tick(&mut self) -> bool;
}
