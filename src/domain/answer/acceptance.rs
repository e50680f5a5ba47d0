// src/domain/answer/acceptance.rs
//! Accept/unaccept transitions of an answer and the reputation they move.
use std::str::FromStr;

use crate::domain::answer::entity::Answer;
use crate::domain::errors::DomainError;
use crate::domain::ids::{AnswerId, UserId};

/// Reputation granted to an answer's author when it is accepted, and taken
/// back when it is unaccepted.
pub const ACCEPTANCE_REPUTATION: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptanceState {
    Unaccepted,
    Accepted,
}

impl AcceptanceState {
    pub fn toggled(self) -> Self {
        match self {
            AcceptanceState::Unaccepted => AcceptanceState::Accepted,
            AcceptanceState::Accepted => AcceptanceState::Unaccepted,
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, AcceptanceState::Accepted)
    }
}

/// Whether accepting an answer revokes acceptance of its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcceptancePolicy {
    /// Answers toggle independently; a question may end up with several
    /// accepted answers.
    #[default]
    Toggle,
    /// Accepting an answer first unaccepts every other accepted answer of the
    /// same question.
    Exclusive,
}

impl FromStr for AcceptancePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toggle" => Ok(AcceptancePolicy::Toggle),
            "exclusive" => Ok(AcceptancePolicy::Exclusive),
            other => Err(DomainError::Validation(format!(
                "unknown acceptance policy '{other}'"
            ))),
        }
    }
}

/// One answer changing state, with the matching reputation change on its
/// author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptanceTransition {
    pub answer_id: AnswerId,
    pub owner_id: UserId,
    pub to: AcceptanceState,
    pub reputation_delta: i64,
}

impl AcceptanceTransition {
    pub fn toggle(answer: &Answer) -> Self {
        let to = answer.acceptance().toggled();
        let reputation_delta = if to.is_accepted() {
            ACCEPTANCE_REPUTATION
        } else {
            -ACCEPTANCE_REPUTATION
        };
        Self {
            answer_id: answer.id,
            owner_id: answer.owner_id,
            to,
            reputation_delta,
        }
    }
}

/// Every transition a single accept/unaccept request results in. Sibling
/// revocations come first so the store never holds two accepted answers
/// under the exclusive policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptancePlan {
    pub revoked: Vec<AcceptanceTransition>,
    pub target: AcceptanceTransition,
}

impl AcceptancePlan {
    /// `accepted_siblings` are the currently accepted answers of the same
    /// question; the target itself is ignored if present.
    pub fn for_toggle(
        answer: &Answer,
        accepted_siblings: &[Answer],
        policy: AcceptancePolicy,
    ) -> Self {
        let target = AcceptanceTransition::toggle(answer);
        let revoked = match (policy, target.to) {
            (AcceptancePolicy::Exclusive, AcceptanceState::Accepted) => accepted_siblings
                .iter()
                .filter(|sibling| sibling.id != answer.id && sibling.accepted)
                .map(AcceptanceTransition::toggle)
                .collect(),
            _ => Vec::new(),
        };
        Self { revoked, target }
    }

    pub fn transitions(&self) -> impl Iterator<Item = &AcceptanceTransition> {
        self.revoked.iter().chain(std::iter::once(&self.target))
    }
}
