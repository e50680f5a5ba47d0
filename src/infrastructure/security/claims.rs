// src/infrastructure/security/claims.rs
//! Reads the principal back out of the authority block facts.
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, TimeZone, Utc};

#[derive(Default)]
struct Claims {
    user: Option<(i64, String)>,
    issued_at: Option<u64>,
    expires_at: Option<u64>,
}

impl Claims {
    fn apply(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user = Some((*id, name.clone()));
            }
            ("issued_at", [Term::Date(seconds)]) => self.issued_at = Some(*seconds),
            ("expires_at", [Term::Date(seconds)]) => self.expires_at = Some(*seconds),
            _ => {}
        }
    }
}

fn timestamp(seconds: u64, claim: &str) -> ApplicationResult<DateTime<Utc>> {
    i64::try_from(seconds)
        .ok()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .ok_or_else(|| ApplicationError::unauthorized(format!("invalid {claim}")))
}

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut claims = Claims::default();
    for fact in facts {
        claims.apply(fact.predicate);
    }

    let (id, username) = claims
        .user
        .ok_or_else(|| ApplicationError::unauthorized("missing user"))?;
    let issued_at = claims
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = claims
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    Ok(AuthenticatedUser {
        id: UserId::new(id).map_err(|_| ApplicationError::unauthorized("invalid user id"))?,
        username,
        issued_at: timestamp(issued_at, "issued_at")?,
        expires_at: timestamp(expires_at, "expires_at")?,
    })
}
