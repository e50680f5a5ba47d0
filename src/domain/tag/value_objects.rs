// src/domain/tag/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_TAG_NAME_LEN: usize = 35;

/// Tag name. Matching is exact and case-sensitive; only surrounding
/// whitespace is stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("tag name cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_TAG_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "tag name cannot exceed {MAX_TAG_NAME_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}
