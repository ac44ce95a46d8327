use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String, // bcrypt hash
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(id: i64, email: &str, password_hash: &str, name: &str) -> Self {
        User {
            id,
            email: email.to_string(),
            password: password_hash.to_string(),
            name: name.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(3, "ann@example.com", "$2b$04$hash", "Ann");

        assert_eq!(user.id, 3);
        assert_eq!(user.email, "ann@example.com");
        assert_eq!(user.name, "Ann");
        assert!(user.created_at.is_some());
    }
}
