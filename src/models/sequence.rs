use serde::{Deserialize, Serialize};

/// Next-identifier counters, one per collection.
///
/// Counters only ever move forward, so removing a decided request never
/// frees its id for a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequences {
    pub next_user_id: u64,
    pub next_request_id: u64,
    pub next_transaction_id: u64,
}

impl Default for Sequences {
    fn default() -> Self {
        Sequences {
            next_user_id: 1,
            next_request_id: 1,
            next_transaction_id: 1,
        }
    }
}

impl Sequences {
    /// Derive counters from the highest ids present.
    pub fn after(max_user: Option<u64>, max_request: Option<u64>, max_transaction: Option<u64>) -> Self {
        Sequences {
            next_user_id: max_user.map_or(1, |id| id + 1),
            next_request_id: max_request.map_or(1, |id| id + 1),
            next_transaction_id: max_transaction.map_or(1, |id| id + 1),
        }
    }

    /// Never lets a counter fall behind ids already in use.
    pub fn merge(self, other: Sequences) -> Self {
        Sequences {
            next_user_id: self.next_user_id.max(other.next_user_id),
            next_request_id: self.next_request_id.max(other.next_request_id),
            next_transaction_id: self.next_transaction_id.max(other.next_transaction_id),
        }
    }

    pub fn user(&mut self) -> u64 {
        bump(&mut self.next_user_id)
    }

    pub fn request(&mut self) -> u64 {
        bump(&mut self.next_request_id)
    }

    pub fn transaction(&mut self) -> u64 {
        bump(&mut self.next_transaction_id)
    }
}

fn bump(counter: &mut u64) -> u64 {
    let id = *counter;
    *counter += 1;
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_one() {
        let mut seq = Sequences::default();
        assert_eq!(seq.request(), 1);
        assert_eq!(seq.request(), 2);
        assert_eq!(seq.user(), 1);
    }

    #[test]
    fn after_skips_past_highest_id() {
        let seq = Sequences::after(Some(4), None, Some(3));
        assert_eq!(seq.next_user_id, 5);
        assert_eq!(seq.next_request_id, 1);
        assert_eq!(seq.next_transaction_id, 4);
    }

    #[test]
    fn merge_keeps_the_larger_counter() {
        let stored = Sequences { next_user_id: 9, next_request_id: 2, next_transaction_id: 5 };
        let derived = Sequences::after(Some(4), Some(6), Some(3));
        let merged = stored.merge(derived);
        assert_eq!(merged, Sequences { next_user_id: 9, next_request_id: 7, next_transaction_id: 5 });
    }
}
