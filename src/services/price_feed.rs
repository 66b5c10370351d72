// Simulated market ticker. Shares nothing with the ledger.
use std::sync::Arc;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::models::market::{initial_prices, CoinPrice};

/// Largest absolute per-tick move, in percent.
pub const MAX_TICK_PERCENT: f64 = 0.25;

#[derive(Clone)]
pub struct PriceFeed {
    prices: Arc<RwLock<Vec<CoinPrice>>>,
}

impl Default for PriceFeed {
    fn default() -> Self {
        PriceFeed::new(initial_prices())
    }
}

impl PriceFeed {
    pub fn new(prices: Vec<CoinPrice>) -> Self {
        PriceFeed {
            prices: Arc::new(RwLock::new(prices)),
        }
    }

    pub async fn snapshot(&self) -> Vec<CoinPrice> {
        self.prices.read().await.clone()
    }

    /// Nudge every price by a random delta in [-0.25, 0.25) percent.
    pub async fn tick<R: Rng>(&self, rng: &mut R) {
        let mut prices = self.prices.write().await;
        for coin in prices.iter_mut() {
            let delta = rng.gen_range(-MAX_TICK_PERCENT..MAX_TICK_PERCENT);
            apply_move(coin, delta);
        }
    }

    pub fn spawn(&self, every: Duration) -> JoinHandle<()> {
        let feed = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            // First tick fires immediately; skip it so the seed prices show first
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut rng = rand::rngs::StdRng::from_entropy();
                feed.tick(&mut rng).await;
                tracing::debug!("Price feed ticked");
            }
        })
    }
}

fn apply_move(coin: &mut CoinPrice, delta: f64) {
    coin.price *= 1.0 + delta / 100.0;
    coin.change += delta;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_scales_price_and_accumulates_change() {
        let mut coin = CoinPrice::new("btc", "Bitcoin (BTC)", 100.0, 2.0);
        apply_move(&mut coin, 0.2);
        assert!((coin.price - 100.2).abs() < 1e-9);
        assert!((coin.change - 2.2).abs() < 1e-9);
    }

    #[tokio::test]
    async fn tick_stays_within_bounds() {
        let feed = PriceFeed::default();
        let before = feed.snapshot().await;
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let prev = feed.snapshot().await;
            feed.tick(&mut rng).await;
            for (old, new) in prev.iter().zip(feed.snapshot().await.iter()) {
                let moved = (new.change - old.change).abs();
                assert!(moved <= MAX_TICK_PERCENT + 1e-9);
                assert!(new.price > 0.0);
            }
        }

        let after = feed.snapshot().await;
        assert_eq!(before.len(), after.len());
        assert_eq!(after[0].id, "btc");
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_feed_moves_prices() {
        let feed = PriceFeed::default();
        let before = feed.snapshot().await;

        let handle = feed.spawn(Duration::from_secs(10));
        tokio::time::sleep(Duration::from_secs(25)).await;
        handle.abort();

        assert_ne!(before, feed.snapshot().await);
    }
}
