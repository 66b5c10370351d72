// Fixed starting dataset, used when the data directory holds no state yet.
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::models::request::{PendingRequest, RequestKind, RequestStatus, SELLER_DEPOSIT};
use crate::models::sequence::Sequences;
use crate::models::transaction::{Transaction, TransactionKind, TransactionStatus};
use crate::models::user::{User, UserRole, UserStatus};
use crate::models::Snapshot;
use crate::services::password::PasswordHasher;

struct SeedUser {
    id: u64,
    name: &'static str,
    email: &'static str,
    mobile: &'static str,
    // cents
    wallet: i64,
    role: UserRole,
    status: UserStatus,
    password: &'static str,
    member_since: &'static str,
}

const SEED_USERS: [SeedUser; 4] = [
    SeedUser {
        id: 1,
        name: "John Doe",
        email: "john@example.com",
        mobile: "01712345678",
        wallet: 125_050,
        role: UserRole::User,
        status: UserStatus::Active,
        password: "password123",
        member_since: "Jan 2024",
    },
    SeedUser {
        id: 2,
        name: "Sarah Smith",
        email: "sarah@example.com",
        mobile: "01812345678",
        wallet: 54_000,
        role: UserRole::User,
        status: UserStatus::Active,
        password: "password123",
        member_since: "Feb 2024",
    },
    SeedUser {
        id: 3,
        name: "Mike Johnson",
        email: "mike@example.com",
        mobile: "01912345678",
        wallet: 0,
        role: UserRole::User,
        status: UserStatus::Pending,
        password: "password123",
        member_since: "Mar 2024",
    },
    SeedUser {
        id: 4,
        name: "Admin User",
        email: "admin@axcrypto.com",
        mobile: "01612345678",
        wallet: 325_075,
        role: UserRole::Admin,
        status: UserStatus::Active,
        password: "admin123",
        member_since: "Jan 2023",
    },
];

pub fn users(hasher: &PasswordHasher) -> Result<Vec<User>> {
    SEED_USERS
        .iter()
        .map(|seed| {
            Ok(User {
                id: seed.id,
                name: seed.name.to_string(),
                email: seed.email.to_string(),
                mobile: seed.mobile.to_string(),
                wallet: Decimal::new(seed.wallet, 2),
                role: seed.role,
                status: seed.status,
                password_hash: hasher.hash(seed.password)?,
                member_since: seed.member_since.to_string(),
            })
        })
        .collect()
}

pub fn requests() -> Vec<PendingRequest> {
    vec![
        PendingRequest {
            id: 1,
            user_id: 3,
            kind: RequestKind::SellerApplication,
            amount: SELLER_DEPOSIT,
            status: RequestStatus::Pending,
            details: "New seller application with all documents submitted".to_string(),
            submitted_at: "2024-01-25 10:30:00".to_string(),
        },
        PendingRequest {
            id: 2,
            user_id: 1,
            kind: RequestKind::BuyRequest,
            amount: Decimal::new(500, 0),
            status: RequestStatus::Pending,
            details: "Buy 500 USDT via bKash".to_string(),
            submitted_at: "2024-01-25 11:15:00".to_string(),
        },
    ]
}

pub fn transactions() -> Vec<Transaction> {
    let completed = |id, user_id, kind, amount, date: &str, notes: &str| Transaction {
        id,
        user_id,
        kind,
        amount: Decimal::new(amount, 0),
        status: TransactionStatus::Completed,
        date: date.to_string(),
        approved_by: "Admin".to_string(),
        notes: notes.to_string(),
    };

    // Oldest first; listings reverse append order
    vec![
        completed(3, 1, TransactionKind::Credit, 500, "2024-01-25 08:15:00", "Buy order approved"),
        completed(2, 2, TransactionKind::Debit, 50, "2024-01-25 09:30:00", "Withdrawal"),
        completed(1, 1, TransactionKind::Credit, 100, "2024-01-25 10:00:00", "Welcome bonus"),
    ]
}

pub fn snapshot(hasher: &PasswordHasher) -> Result<Snapshot> {
    let users = users(hasher)?;
    let requests = requests();
    let transactions = transactions();
    let sequences = Sequences::after(
        users.iter().map(|u| u.id).max(),
        requests.iter().map(|r| r.id).max(),
        transactions.iter().map(|t| t.id).max(),
    );

    Ok(Snapshot {
        users,
        requests,
        transactions,
        sequences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn seed_has_expected_shape() {
        let hasher = PasswordHasher::new(4);
        let snap = snapshot(&hasher).unwrap();

        assert_eq!(snap.users.len(), 4);
        assert_eq!(snap.requests.len(), 2);
        assert_eq!(snap.transactions.len(), 3);
        assert_eq!(snap.users[0].wallet, dec!(1250.50));
        assert_eq!(snap.users[1].wallet, dec!(540.00));
        assert_eq!(snap.users[3].wallet, dec!(3250.75));
        assert_eq!(snap.users.iter().filter(|u| u.role == UserRole::Admin).count(), 1);
        assert_eq!(snap.sequences.next_transaction_id, 4);
    }

    #[test]
    fn seed_passwords_are_hashed() {
        let hasher = PasswordHasher::new(4);
        let users = users(&hasher).unwrap();
        assert!(users.iter().all(|u| !u.password_hash.contains("password123")));
        assert!(hasher.verify("admin123", &users[3].password_hash));
    }
}
