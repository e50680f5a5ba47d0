// src/domain/post.rs
//! Polymorphic reference to something that can be voted or commented on.
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{AnswerId, QuestionId};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    Question,
    Answer,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Question => "question",
            PostKind::Answer => "answer",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(PostKind::Question),
            "answer" => Ok(PostKind::Answer),
            other => Err(DomainError::Validation(format!("unknown post kind '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostRef {
    Question(QuestionId),
    Answer(AnswerId),
}

impl PostRef {
    pub fn from_parts(kind: PostKind, id: i64) -> DomainResult<Self> {
        Ok(match kind {
            PostKind::Question => PostRef::Question(QuestionId::new(id)?),
            PostKind::Answer => PostRef::Answer(AnswerId::new(id)?),
        })
    }

    pub fn kind(&self) -> PostKind {
        match self {
            PostRef::Question(_) => PostKind::Question,
            PostRef::Answer(_) => PostKind::Answer,
        }
    }

    pub fn raw_id(&self) -> i64 {
        match self {
            PostRef::Question(id) => id.0,
            PostRef::Answer(id) => id.0,
        }
    }
}

impl fmt::Display for PostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.raw_id())
    }
}

impl From<QuestionId> for PostRef {
    fn from(value: QuestionId) -> Self {
        PostRef::Question(value)
    }
}

impl From<AnswerId> for PostRef {
    fn from(value: AnswerId) -> Self {
        PostRef::Answer(value)
    }
}

/// How far comment and vote cleanup reaches when a question is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CascadePolicy {
    /// Only records attached to the deleted question itself.
    #[default]
    Direct,
    /// Records attached to the question's answers are removed as well.
    Transitive,
}

impl FromStr for CascadePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(CascadePolicy::Direct),
            "transitive" => Ok(CascadePolicy::Transitive),
            other => Err(DomainError::Validation(format!(
                "unknown cascade policy '{other}'"
            ))),
        }
    }
}

/// Rows removed by a cascading delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub answers: u64,
    pub comments: u64,
    pub votes: u64,
}
