// src/domain/question/entity.rs
use std::collections::BTreeSet;

use crate::domain::ids::{AnswerId, QuestionId, TagId, UserId};
use crate::domain::question::value_objects::{QuestionBody, QuestionTitle};
use crate::domain::tag::{Tag, TagDelta};
use crate::domain::user::UserSummary;
use crate::domain::vote::VoteTally;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub title: QuestionTitle,
    pub body: QuestionBody,
    pub owner_id: UserId,
    pub tag_ids: BTreeSet<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }

    /// Apply a tag delta. Adding a tag that is already present is a no-op.
    pub fn apply_tags(&mut self, delta: &TagDelta, now: DateTime<Utc>) {
        if delta.is_empty() {
            return;
        }
        for id in &delta.to_remove {
            self.tag_ids.remove(id);
        }
        self.tag_ids.extend(delta.to_add.iter().copied());
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub title: QuestionTitle,
    pub body: QuestionBody,
    pub owner_id: UserId,
    pub tag_ids: BTreeSet<TagId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct QuestionUpdate {
    pub id: QuestionId,
    pub title: Option<QuestionTitle>,
    pub body: Option<QuestionBody>,
    pub tags: Option<TagDelta>,
    pub updated_at: DateTime<Utc>,
}

impl QuestionUpdate {
    pub fn new(id: QuestionId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            tags: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: QuestionTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: QuestionBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_tags(mut self, delta: TagDelta) -> Self {
        self.tags = Some(delta);
        self
    }
}

/// Question joined with its owner, tags, vote tally and answer counters.
#[derive(Debug, Clone)]
pub struct QuestionView {
    pub question: Question,
    pub owner: UserSummary,
    pub tags: Vec<Tag>,
    pub tally: VoteTally,
    pub answers_count: u64,
    /// An accepted answer, when there is one. If several are accepted the
    /// oldest is reported.
    pub answer_accepted: Option<AnswerId>,
}
