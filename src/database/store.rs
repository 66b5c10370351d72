//! Durable mirror of the ledger collections.
//!
//! Each collection lives under its own key (one JSON file per key in the
//! file-backed store) and is overwritten wholesale on every save. A key
//! that is absent at load time falls back to the seed dataset.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::database::seed;
use crate::errors::Result;
use crate::models::request::PendingRequest;
use crate::models::sequence::Sequences;
use crate::models::transaction::Transaction;
use crate::models::user::User;
use crate::models::Snapshot;
use crate::services::ledger::Ledger;
use crate::services::password::PasswordHasher;

const USERS_KEY: &str = "users";
const REQUESTS_KEY: &str = "requests";
const TRANSACTIONS_KEY: &str = "transactions";
const SEQUENCES_KEY: &str = "sequences";

/// What a store found at load time; `None` means the key was never written.
#[derive(Debug, Default)]
pub struct StoredState {
    pub users: Option<Vec<User>>,
    pub requests: Option<Vec<PendingRequest>>,
    pub transactions: Option<Vec<Transaction>>,
    pub sequences: Option<Sequences>,
}

#[async_trait]
pub trait StateStore: Send + Sync {
    async fn load(&self) -> Result<StoredState>;
    async fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

/// Rehydrate the ledger, filling absent keys from the seed dataset.
pub async fn load_or_seed(store: &dyn StateStore, hasher: PasswordHasher) -> Result<Ledger> {
    let stored = store.load().await?;

    let users = match stored.users {
        Some(users) => users,
        None => {
            info!("🌱 No stored users, using seed dataset");
            seed::users(&hasher)?
        }
    };
    let requests = stored.requests.unwrap_or_else(seed::requests);
    let transactions = stored.transactions.unwrap_or_else(seed::transactions);

    let snapshot = Snapshot {
        users,
        requests,
        transactions,
        sequences: stored.sequences.unwrap_or_default(),
    };

    Ok(Ledger::from_snapshot(snapshot, hasher))
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    async fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match tokio::fs::read(self.path(key)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_key<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(value)?;

        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load(&self) -> Result<StoredState> {
        let state = StoredState {
            users: self.read_key(USERS_KEY).await?,
            requests: self.read_key(REQUESTS_KEY).await?,
            transactions: self.read_key(TRANSACTIONS_KEY).await?,
            sequences: self.read_key(SEQUENCES_KEY).await?,
        };
        debug!("Loaded state from {}", self.dir.display());
        Ok(state)
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        self.write_key(USERS_KEY, &snapshot.users).await?;
        self.write_key(REQUESTS_KEY, &snapshot.requests).await?;
        self.write_key(TRANSACTIONS_KEY, &snapshot.transactions).await?;
        self.write_key(SEQUENCES_KEY, &snapshot.sequences).await?;

        debug!("Saved state to {}", self.dir.display());
        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// In-process store; `fail_writes` simulates a full disk.
    #[derive(Default)]
    pub struct MemoryStore {
        saved: Mutex<Option<Snapshot>>,
        pub fail_writes: AtomicBool,
    }

    impl MemoryStore {
        pub fn saved(&self) -> Option<Snapshot> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StateStore for MemoryStore {
        async fn load(&self) -> Result<StoredState> {
            Ok(match self.saved() {
                Some(snap) => StoredState {
                    users: Some(snap.users),
                    requests: Some(snap.requests),
                    transactions: Some(snap.transactions),
                    sequences: Some(snap.sequences),
                },
                None => StoredState::default(),
            })
        }

        async fn save(&self, snapshot: &Snapshot) -> Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(std::io::Error::new(ErrorKind::Other, "simulated write failure").into());
            }
            *self.saved.lock().unwrap() = Some(snapshot.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::RequestKind;
    use rust_decimal_macros::dec;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[tokio::test]
    async fn empty_directory_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let ledger = load_or_seed(&store, hasher()).await.unwrap();
        assert_eq!(ledger.users().len(), 4);
        assert_eq!(ledger.requests().len(), 2);
        assert_eq!(ledger.transactions().len(), 3);
    }

    #[tokio::test]
    async fn save_and_reload_preserves_state_and_counters() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state"));

        let mut ledger = load_or_seed(&store, hasher()).await.unwrap();
        ledger.approve_request(2, dec!(500), "Admin User").unwrap();
        store.save(&ledger.snapshot()).await.unwrap();

        let mut reloaded = load_or_seed(&store, hasher()).await.unwrap();
        assert_eq!(reloaded.requests().len(), 1);
        assert_eq!(reloaded.user(1).unwrap().wallet, dec!(1750.50));

        let req = reloaded
            .submit_request(Some(1), RequestKind::BuyRequest, dec!(5), String::new())
            .unwrap();
        assert_eq!(req.id, 3);
    }

    #[tokio::test]
    async fn persisted_users_never_hold_raw_passwords() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let ledger = load_or_seed(&store, hasher()).await.unwrap();
        store.save(&ledger.snapshot()).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(!raw.contains("password123"));
        assert!(!raw.contains("admin123"));
        assert!(raw.contains("passwordHash"));
    }

    #[tokio::test]
    async fn missing_key_is_seeded_independently() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(dir.path().join("requests.json"), "[]").unwrap();

        let ledger = load_or_seed(&store, hasher()).await.unwrap();
        assert!(ledger.requests().is_empty());
        assert_eq!(ledger.users().len(), 4);
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(dir.path().join("users.json"), "{not json").unwrap();

        assert!(load_or_seed(&store, hasher()).await.is_err());
    }
}
