// src/domain/answer/entity.rs
use crate::domain::answer::acceptance::AcceptanceState;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{AnswerId, QuestionId, UserId};
use crate::domain::user::UserSummary;
use crate::domain::vote::VoteTally;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerBody(String);

impl AnswerBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("answer cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub owner_id: UserId,
    pub body: AnswerBody,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Answer {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }

    pub fn acceptance(&self) -> AcceptanceState {
        if self.accepted {
            AcceptanceState::Accepted
        } else {
            AcceptanceState::Unaccepted
        }
    }

    pub fn set_body(&mut self, body: AnswerBody, now: DateTime<Utc>) {
        self.body = body;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: QuestionId,
    pub owner_id: UserId,
    pub body: AnswerBody,
    pub created_at: DateTime<Utc>,
}

/// Answer joined with its owner and vote tally.
#[derive(Debug, Clone)]
pub struct AnswerView {
    pub answer: Answer,
    pub owner: UserSummary,
    pub tally: VoteTally,
}
