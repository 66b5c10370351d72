pub mod market;
pub mod request;
pub mod sequence;
pub mod transaction;
pub mod user;

use serde::{Deserialize, Serialize};

use request::PendingRequest;
use sequence::Sequences;
use transaction::Transaction;
use user::User;

/// Everything that crosses the persistence boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub requests: Vec<PendingRequest>,
    pub transactions: Vec<Transaction>,
    pub sequences: Sequences,
}
