use bcrypt::{hash, verify};

use crate::errors::Result;

/// Salted one-way credential hashing. Raw secrets never leave this type.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        PasswordHasher { cost }
    }

    pub fn hash(&self, password: &str) -> Result<String> {
        Ok(hash(password, self.cost)?)
    }

    /// A malformed stored hash counts as a mismatch.
    pub fn verify(&self, password: &str, password_hash: &str) -> bool {
        match verify(password, password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash could not be checked: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hasher = PasswordHasher::new(4);
        let stored = hasher.hash("password123").unwrap();

        assert_ne!(stored, "password123");
        assert!(hasher.verify("password123", &stored));
        assert!(!hasher.verify("Password123", &stored));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let hasher = PasswordHasher::new(4);
        let a = hasher.hash("admin123").unwrap();
        let b = hasher.hash("admin123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!PasswordHasher::new(4).verify("password123", "password123"));
    }
}
