// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;

use overflow_core::application::ApplicationResult;
use overflow_core::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use overflow_core::application::error::ApplicationError;
use overflow_core::application::ports::security::{PasswordHasher, TokenManager};
use overflow_core::domain::user::{User, UserId};

use super::time::fixed_now;

/// Tokens are plain `user:<id>:<username>` strings.
pub fn token_for(user: &User) -> String {
    format!("user:{}:{}", user.id, user.username)
}

pub fn bearer(user: &User) -> String {
    format!("Bearer {}", token_for(user))
}

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = fixed_now();
        Ok(AuthTokenDto {
            token: format!("user:{}:{}", subject.user_id, subject.username),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let invalid = || ApplicationError::unauthorized("invalid token");
        let mut parts = token.splitn(3, ':');
        let (Some("user"), Some(id), Some(username)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let id = id
            .parse::<i64>()
            .ok()
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(invalid)?;

        let now = fixed_now();
        Ok(AuthenticatedUser {
            id,
            username: username.to_string(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        })
    }
}

/// Deterministic hasher: `hash::<password>`.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid username or password"))
        }
    }
}
