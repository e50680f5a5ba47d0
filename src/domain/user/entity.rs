// src/domain/user/entity.rs
use crate::domain::user::{
    UserId,
    value_objects::{PasswordHash, Reputation, Username},
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub reputation: Reputation,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.to_string(),
            reputation: self.reputation,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a user joined onto questions, answers and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub reputation: Reputation,
}
