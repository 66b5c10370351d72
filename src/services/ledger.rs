//! Ledger & request engine.
//!
//! Owns the user, pending-request and transaction collections and applies
//! every wallet-affecting operation. All methods are synchronous and touch
//! nothing outside `self`; callers hold a single write lock around each
//! call, which is what keeps a request from ever being seen both pending
//! and credited.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::{AppError, Result};
use crate::models::request::{PendingRequest, RequestId, RequestKind, RequestStatus};
use crate::models::sequence::Sequences;
use crate::models::transaction::{Transaction, TransactionKind, TransactionStatus};
use crate::models::user::{User, UserId, UserRole, UserStatus};
use crate::models::Snapshot;
use crate::services::password::PasswordHasher;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStats {
    pub pending_requests: usize,
    pub total_users: usize,
    pub suspended_users: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_wallet_balance: Decimal,
}

/// Fields collected by the registration form.
#[derive(Debug, Clone, Copy)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub mobile: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

#[derive(Debug)]
pub struct Ledger {
    users: Vec<User>,
    requests: Vec<PendingRequest>,
    // Append order; listings reverse it
    transactions: Vec<Transaction>,
    sequences: Sequences,
    hasher: PasswordHasher,
}

impl Ledger {
    pub fn from_snapshot(snapshot: Snapshot, hasher: PasswordHasher) -> Self {
        let derived = Sequences::after(
            snapshot.users.iter().map(|u| u.id).max(),
            snapshot.requests.iter().map(|r| r.id).max(),
            snapshot.transactions.iter().map(|t| t.id).max(),
        );

        Ledger {
            users: snapshot.users,
            requests: snapshot.requests,
            transactions: snapshot.transactions,
            sequences: snapshot.sequences.merge(derived),
            hasher,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            users: self.users.clone(),
            requests: self.requests.clone(),
            transactions: self.transactions.clone(),
            sequences: self.sequences,
        }
    }

    // ===== READ VIEWS =====

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// The actionable queue. Only pending requests are ever stored.
    pub fn requests(&self) -> &[PendingRequest] {
        &self.requests
    }

    pub fn request(&self, id: RequestId) -> Option<&PendingRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn requests_for(&self, user_id: UserId) -> Vec<&PendingRequest> {
        self.requests.iter().filter(|r| r.user_id == user_id).collect()
    }

    /// Full audit trail, newest first.
    pub fn transactions(&self) -> Vec<&Transaction> {
        self.transactions.iter().rev().collect()
    }

    pub fn transactions_for(&self, user_id: UserId, limit: Option<usize>) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .rev()
            .filter(|t| t.user_id == user_id)
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            pending_requests: self.requests.len(),
            total_users: self.users.len(),
            suspended_users: self
                .users
                .iter()
                .filter(|u| u.status == UserStatus::Suspended)
                .count(),
            total_wallet_balance: self
                .users
                .iter()
                .fold(Decimal::ZERO, |total, u| total.saturating_add(u.wallet)),
        }
    }

    // ===== ACCOUNTS =====

    pub fn hasher(&self) -> PasswordHasher {
        self.hasher
    }

    /// Cheap checks that can run under a read lock before the password is
    /// hashed.
    pub fn check_registration(&self, form: &Registration<'_>) -> Result<()> {
        if form.password != form.confirm_password {
            return Err(AppError::PasswordMismatch);
        }

        if self
            .users
            .iter()
            .any(|u| u.email == form.email || u.mobile == form.mobile)
        {
            return Err(AppError::DuplicateUser);
        }

        Ok(())
    }

    /// `password_hash` is `form.password` hashed with [`Ledger::hasher`].
    /// The checks are repeated here since another registration may have
    /// landed while the hash was computed.
    pub fn register_user(&mut self, form: Registration<'_>, password_hash: String) -> Result<User> {
        self.check_registration(&form)?;

        let user = User {
            id: self.sequences.user(),
            name: form.name.to_string(),
            email: form.email.to_string(),
            mobile: form.mobile.to_string(),
            wallet: Decimal::ZERO,
            role: UserRole::User,
            status: UserStatus::Active,
            password_hash,
            member_since: User::member_since_label(Utc::now()),
        };

        info!("👤 Registered user {} ({})", user.id, user.email);
        self.users.push(user.clone());
        Ok(user)
    }

    /// `identifier` may be either the email or the mobile number.
    pub fn authenticate(&self, identifier: &str, password: &str) -> Result<User> {
        let user = self
            .users
            .iter()
            .filter(|u| u.email == identifier || u.mobile == identifier)
            .find(|u| self.hasher.verify(password, &u.password_hash))
            .ok_or(AppError::InvalidCredentials)?;

        if !user.is_active() {
            warn!("Login refused for inactive user {}", user.id);
            return Err(AppError::AccountInactive);
        }

        Ok(user.clone())
    }

    // ===== REQUEST LIFECYCLE =====

    pub fn submit_request(
        &mut self,
        acting_user: Option<UserId>,
        kind: RequestKind,
        amount: Decimal,
        details: String,
    ) -> Result<PendingRequest> {
        let user_id = acting_user.ok_or(AppError::Unauthenticated)?;
        let user = self.user(user_id).ok_or(AppError::UserNotFound(user_id))?;

        if amount <= Decimal::ZERO {
            return Err(AppError::invalid_amount(format!(
                "request amount must be positive, got {}",
                amount
            )));
        }

        if kind == RequestKind::Withdrawal && amount > user.wallet {
            return Err(AppError::InsufficientBalance);
        }

        let request = PendingRequest {
            id: self.sequences.request(),
            user_id,
            kind,
            amount,
            status: RequestStatus::Pending,
            details,
            submitted_at: now_stamp(),
        };

        info!(
            "📨 Request {} submitted by user {}: {} of {}",
            request.id,
            user_id,
            kind.label(),
            amount
        );
        self.requests.push(request.clone());
        Ok(request)
    }

    /// Credits `credit_amount`, which may differ from the requested amount.
    pub fn approve_request(
        &mut self,
        req_id: RequestId,
        credit_amount: Decimal,
        approver: &str,
    ) -> Result<Transaction> {
        let index = self.pending_index(req_id)?;

        if credit_amount < Decimal::ZERO {
            return Err(AppError::invalid_amount(format!(
                "credit amount cannot be negative, got {}",
                credit_amount
            )));
        }

        let (user_id, kind, requested) = {
            let req = &self.requests[index];
            (req.user_id, req.kind, req.amount)
        };
        let user_index = self.user_index(user_id)?;
        let new_wallet = credited(&self.users[user_index], credit_amount)?;

        if credit_amount != requested {
            warn!(
                "Request {} approved with credit {} against requested {}",
                req_id, credit_amount, requested
            );
        }

        self.requests.remove(index);
        self.users[user_index].wallet = new_wallet;

        let transaction = self.record(
            user_id,
            TransactionKind::Credit,
            credit_amount,
            TransactionStatus::Completed,
            approver,
            format!("Approved {}", kind.label()),
        );

        info!(
            "✅ Request {} approved by {}; user {} credited {}",
            req_id, approver, user_id, credit_amount
        );
        Ok(transaction)
    }

    pub fn reject_request(&mut self, req_id: RequestId, approver: &str) -> Result<Transaction> {
        let index = self.pending_index(req_id)?;
        let req = self.requests.remove(index);

        let transaction = self.record(
            req.user_id,
            TransactionKind::Debit,
            Decimal::ZERO,
            TransactionStatus::Rejected,
            approver,
            format!("Rejected {}", req.kind.label()),
        );

        info!("🚫 Request {} rejected by {}", req_id, approver);
        Ok(transaction)
    }

    /// Manual top-up not tied to any pending request.
    pub fn admin_credit_user(
        &mut self,
        user_id: UserId,
        amount: Decimal,
        notes: &str,
        approver: &str,
    ) -> Result<Transaction> {
        let user_index = self.user_index(user_id)?;

        if amount <= Decimal::ZERO {
            return Err(AppError::invalid_amount(format!(
                "credit amount must be positive, got {}",
                amount
            )));
        }

        let new_wallet = credited(&self.users[user_index], amount)?;
        self.users[user_index].wallet = new_wallet;

        let transaction = self.record(
            user_id,
            TransactionKind::Credit,
            amount,
            TransactionStatus::Completed,
            approver,
            format!("Admin Adjustment: {}", notes),
        );

        info!("💰 {} credited user {} with {}", approver, user_id, amount);
        Ok(transaction)
    }

    // ===== INTERNALS =====

    fn pending_index(&self, req_id: RequestId) -> Result<usize> {
        self.requests
            .iter()
            .position(|r| r.id == req_id)
            .ok_or(AppError::RequestNotFound(req_id))
    }

    fn user_index(&self, user_id: UserId) -> Result<usize> {
        self.users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or(AppError::UserNotFound(user_id))
    }

    fn record(
        &mut self,
        user_id: UserId,
        kind: TransactionKind,
        amount: Decimal,
        status: TransactionStatus,
        approver: &str,
        notes: String,
    ) -> Transaction {
        let transaction = Transaction {
            id: self.sequences.transaction(),
            user_id,
            kind,
            amount,
            status,
            date: now_stamp(),
            approved_by: approver.to_string(),
            notes,
        };
        self.transactions.push(transaction.clone());
        transaction
    }
}

fn credited(user: &User, amount: Decimal) -> Result<Decimal> {
    user.wallet.checked_add(amount).ok_or_else(|| {
        AppError::invalid_amount(format!(
            "crediting {} would overflow the wallet of user {}",
            amount, user.id
        ))
    })
}

fn now_stamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
