use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::User,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub exp: i64, // Expiration time (as UTC timestamp)
}

impl Claims {
    pub fn new(user: &User, expiration_hours: i64) -> AppResult<Self> {
        let exp = Duration::try_hours(expiration_hours)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::SigningError(format!(
                    "Token lifetime of {} hours is out of range",
                    expiration_hours
                ))
            })?;

        Ok(Self {
            user_id: user.id,
            exp: exp.timestamp(),
        })
    }
}
