//! bcrypt password hashing.
//!
//! Hashing and verification are CPU-bound, so both run on the blocking pool
//! instead of the async workers.

use crate::errors::{AppError, AppResult};

/// Lowest work factor bcrypt accepts.
pub const MIN_COST: u32 = 4;
/// Highest work factor bcrypt accepts.
pub const MAX_COST: u32 = 31;

#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> AppResult<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(AppError::ConfigError(format!(
                "bcrypt cost must be between {} and {}, got {}",
                MIN_COST, MAX_COST, cost
            )));
        }

        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, password: &str) -> AppResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::HashingError(format!("Hashing task failed: {}", e)))?
            .map_err(|e| AppError::HashingError(e.to_string()))
    }

    /// Returns `Ok(false)` for a mismatch and for a stored hash bcrypt cannot
    /// parse.
    pub async fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::HashingError(format!("Verification task failed: {}", e)))?;

        Ok(verified.unwrap_or(false))
    }
}
