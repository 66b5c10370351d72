use std::sync::Arc;

use tokio::sync::{RwLock, RwLockWriteGuard};

use crate::database::store::StateStore;
use crate::errors::Result;
use crate::services::ledger::Ledger;
use crate::services::price_feed::PriceFeed;
use crate::services::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<RwLock<Ledger>>,
    pub store: Arc<dyn StateStore>,
    pub tokens: TokenService,
    pub prices: PriceFeed,
}

impl AppState {
    pub fn new(ledger: Ledger, store: Arc<dyn StateStore>, tokens: TokenService) -> Self {
        AppState {
            ledger: Arc::new(RwLock::new(ledger)),
            store,
            tokens,
            prices: PriceFeed::default(),
        }
    }

    /// Explicit save boundary. Called with the write guard still held so the
    /// mirror always matches what readers can observe.
    pub async fn persist(&self, ledger: &RwLockWriteGuard<'_, Ledger>) -> Result<()> {
        if let Err(e) = self.store.save(&ledger.snapshot()).await {
            tracing::error!("❌ Failed to persist ledger state: {}", e);
            return Err(e);
        }
        Ok(())
    }
}
