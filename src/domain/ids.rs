// src/domain/ids.rs
//! Positive integer identifiers for every persisted entity.
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> DomainResult<Self> {
                if id <= 0 {
                    Err(DomainError::Validation(
                        concat!($label, " id must be positive").into(),
                    ))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(UserId, "user");
entity_id!(QuestionId, "question");
entity_id!(AnswerId, "answer");
entity_id!(TagId, "tag");
entity_id!(VoteId, "vote");
entity_id!(CommentId, "comment");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_ids() {
        assert!(QuestionId::new(0).is_err());
        assert!(AnswerId::new(-4).is_err());
        assert_eq!(i64::from(TagId::new(7).unwrap()), 7);
    }

    #[test]
    fn error_names_the_entity() {
        let err = CommentId::new(0).unwrap_err();
        assert_eq!(err.to_string(), "validation error: comment id must be positive");
    }
}
