// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if value.len() < 3 {
            return Err(DomainError::Validation(
                "username must be at least 3 characters long".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reputation points. Unbounded in both directions: repeated unaccepts can
/// push it below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Reputation(pub i64);

impl Reputation {
    pub fn value(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn adjusted(self, delta: i64) -> Self {
        Self(self.0.saturating_add(delta))
    }
}

impl From<Reputation> for i64 {
    fn from(value: Reputation) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_requires_three_chars() {
        assert!(Username::new("ab").is_err());
        assert!(Username::new("   ").is_err());
        assert_eq!(Username::new("alice").unwrap().as_str(), "alice");
    }

    #[test]
    fn reputation_can_go_negative() {
        let rep = Reputation(10).adjusted(-15);
        assert_eq!(rep.value(), -5);
    }
}
