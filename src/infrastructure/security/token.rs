// src/infrastructure/security/token.rs
use super::claims::parse_claims;
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

const AUTHORITY_CODE: &str = r#"
    user({uid}, {uname});
    issued_at({issued});
    expires_at({exp});
    token_type("access");
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
    check if token_type("access");
"#;

/// Ed25519-signed Biscuit access tokens carrying the user id and name.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }

    fn mint(
        &self,
        subject: &TokenSubject,
        issued_at: SystemTime,
        expires_at: SystemTime,
    ) -> ApplicationResult<String> {
        let mut params: HashMap<String, Term> = HashMap::new();
        params.insert("uid".to_string(), i64::from(subject.user_id).into());
        params.insert("uname".to_string(), subject.username.clone().into());
        params.insert("issued".to_string(), issued_at.into());
        params.insert("exp".to_string(), expires_at.into());

        let token = Biscuit::builder()
            .code_with_params(AUTHORITY_CODE, params, HashMap::new())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(self.root.as_ref())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        token
            .seal()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .to_base64()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let token = self.mint(&subject, issued_at, expires_at)?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();

        parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    const KEY: &str = "c2b3fb4d5e1e1c6b8a1c4e9d7f2a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c";

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId(42),
            username: "grace".into(),
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates_as_subject() {
        let manager = BiscuitTokenManager::new(KEY, Duration::from_secs(600)).unwrap();

        let issued = manager.issue(subject()).await.unwrap();
        let user = manager.authenticate(&issued.token).await.unwrap();

        assert_eq!(issued.expires_in, 600);
        assert_eq!(user.id, UserId(42));
        assert_eq!(user.username, "grace");
    }

    #[tokio::test]
    async fn rejects_garbage_and_foreign_tokens() {
        let manager = BiscuitTokenManager::new(KEY, Duration::from_secs(600)).unwrap();
        let other = BiscuitTokenManager::new(
            "0f1e2d3c4b5a69788796a5b4c3d2e1f00112233445566778899aabbccddeeff0",
            Duration::from_secs(600),
        )
        .unwrap();

        let foreign = other.issue(subject()).await.unwrap();

        assert!(matches!(
            manager.authenticate("not-a-token").await,
            Err(ApplicationError::Unauthorized(_))
        ));
        assert!(matches!(
            manager.authenticate(&foreign.token).await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }

    #[test]
    fn rejects_malformed_key() {
        assert!(BiscuitTokenManager::new("abc", Duration::from_secs(1)).is_err());
    }
}
