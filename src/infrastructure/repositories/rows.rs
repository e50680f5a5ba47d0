// src/infrastructure/repositories/rows.rs
//! Row shapes shared by the PostgreSQL repositories and the joined SELECT
//! lists that produce them.
use std::collections::{BTreeSet, HashMap};

use crate::domain::answer::{Answer, AnswerBody, AnswerId, AnswerView};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{QuestionId, TagId, UserId, VoteId};
use crate::domain::post::{PostKind, PostRef};
use crate::domain::question::{Question, QuestionBody, QuestionTitle, QuestionView};
use crate::domain::tag::{Tag, TagName};
use crate::domain::user::{Reputation, UserSummary};
use crate::domain::vote::{Vote, VoteTally, VoteValue};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor};

use super::map_sqlx;

/// Question columns with owner, vote aggregate, viewer vote and answer
/// counters. `$1` is the optional viewer id.
pub(super) const QUESTION_VIEW_SELECT: &str = "
    SELECT q.id, q.title, q.body, q.owner_id, q.created_at, q.updated_at,
           ARRAY(SELECT qt.tag_id FROM question_tags qt WHERE qt.question_id = q.id) AS tag_ids,
           u.username AS owner_username, u.reputation AS owner_reputation,
           COALESCE(vt.votes_count, 0) AS votes_count,
           COALESCE(vt.score, 0) AS score,
           vv.id AS viewer_vote_id, vv.value AS viewer_vote_value,
           COALESCE(ac.answers_count, 0) AS answers_count,
           ac.accepted_id AS answer_accepted
    FROM questions q
    JOIN users u ON u.id = q.owner_id
    LEFT JOIN (
        SELECT target_id, COUNT(*) AS votes_count, SUM(value)::BIGINT AS score
        FROM votes WHERE target_kind = 'question'
        GROUP BY target_id
    ) vt ON vt.target_id = q.id
    LEFT JOIN votes vv
        ON vv.target_kind = 'question' AND vv.target_id = q.id AND vv.voter_id = $1
    LEFT JOIN (
        SELECT question_id,
               COUNT(*) AS answers_count,
               (ARRAY_AGG(id ORDER BY created_at, id) FILTER (WHERE accepted))[1] AS accepted_id
        FROM answers
        GROUP BY question_id
    ) ac ON ac.question_id = q.id";

/// Answer columns with owner, vote aggregate and viewer vote. `$1` is the
/// optional viewer id.
pub(super) const ANSWER_VIEW_SELECT: &str = "
    SELECT a.id, a.question_id, a.owner_id, a.body, a.accepted, a.created_at, a.updated_at,
           u.username AS owner_username, u.reputation AS owner_reputation,
           COALESCE(vt.votes_count, 0) AS votes_count,
           COALESCE(vt.score, 0) AS score,
           vv.id AS viewer_vote_id, vv.value AS viewer_vote_value
    FROM answers a
    JOIN users u ON u.id = a.owner_id
    LEFT JOIN (
        SELECT target_id, COUNT(*) AS votes_count, SUM(value)::BIGINT AS score
        FROM votes WHERE target_kind = 'answer'
        GROUP BY target_id
    ) vt ON vt.target_id = a.id
    LEFT JOIN votes vv
        ON vv.target_kind = 'answer' AND vv.target_id = a.id AND vv.voter_id = $1";

pub(super) const TAG_SELECT: &str = "
    SELECT t.id, t.name, t.info,
           (SELECT COUNT(*) FROM question_tags qt WHERE qt.tag_id = t.id) AS total_questions
    FROM tags t";

#[derive(Debug, FromRow)]
pub(super) struct QuestionRow {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub owner_id: i64,
    pub tag_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = DomainError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question {
            id: QuestionId::new(row.id)?,
            title: QuestionTitle::new(row.title)?,
            body: QuestionBody::new(row.body)?,
            owner_id: UserId::new(row.owner_id)?,
            tag_ids: tag_id_set(row.tag_ids)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn tag_id_set(raw: Vec<i64>) -> DomainResult<BTreeSet<TagId>> {
    raw.into_iter().map(TagId::new).collect()
}

/// Owner and vote columns common to both view rows.
#[derive(Debug, FromRow)]
pub(super) struct ViewExtras {
    pub owner_username: String,
    pub owner_reputation: i64,
    pub votes_count: i64,
    pub score: i64,
    pub viewer_vote_id: Option<i64>,
    pub viewer_vote_value: Option<i16>,
}

impl ViewExtras {
    fn owner(&self, owner_id: UserId) -> UserSummary {
        UserSummary {
            id: owner_id,
            username: self.owner_username.clone(),
            reputation: Reputation(self.owner_reputation),
        }
    }

    fn tally(&self, target: PostRef, viewer: Option<UserId>) -> DomainResult<VoteTally> {
        let viewer_vote = match (self.viewer_vote_id, self.viewer_vote_value, viewer) {
            (Some(id), Some(value), Some(voter)) => Some(Vote {
                id: VoteId::new(id)?,
                target,
                voter,
                value: VoteValue::try_from(i64::from(value))?,
            }),
            _ => None,
        };
        Ok(VoteTally {
            votes_count: count(self.votes_count),
            score: self.score,
            viewer_vote,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct QuestionViewRow {
    #[sqlx(flatten)]
    pub question: QuestionRow,
    #[sqlx(flatten)]
    pub extras: ViewExtras,
    pub answers_count: i64,
    pub answer_accepted: Option<i64>,
}

impl QuestionViewRow {
    /// `tags` must hold every tag referenced by the row.
    pub fn into_view(
        self,
        viewer: Option<UserId>,
        tags: &HashMap<TagId, Tag>,
    ) -> DomainResult<QuestionView> {
        let question = Question::try_from(self.question)?;
        let owner = self.extras.owner(question.owner_id);
        let tally = self
            .extras
            .tally(PostRef::Question(question.id), viewer)?;
        let mut question_tags: Vec<Tag> = question
            .tag_ids
            .iter()
            .filter_map(|id| tags.get(id).cloned())
            .collect();
        question_tags.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(QuestionView {
            question,
            owner,
            tags: question_tags,
            tally,
            answers_count: count(self.answers_count),
            answer_accepted: self.answer_accepted.map(AnswerId::new).transpose()?,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct AnswerRow {
    pub id: i64,
    pub question_id: i64,
    pub owner_id: i64,
    pub body: String,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<AnswerRow> for Answer {
    type Error = DomainError;

    fn try_from(row: AnswerRow) -> Result<Self, Self::Error> {
        Ok(Answer {
            id: AnswerId::new(row.id)?,
            question_id: QuestionId::new(row.question_id)?,
            owner_id: UserId::new(row.owner_id)?,
            body: AnswerBody::new(row.body)?,
            accepted: row.accepted,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct AnswerViewRow {
    #[sqlx(flatten)]
    pub answer: AnswerRow,
    #[sqlx(flatten)]
    pub extras: ViewExtras,
}

impl AnswerViewRow {
    pub fn into_view(self, viewer: Option<UserId>) -> DomainResult<AnswerView> {
        let answer = Answer::try_from(self.answer)?;
        let owner = self.extras.owner(answer.owner_id);
        let tally = self.extras.tally(PostRef::Answer(answer.id), viewer)?;
        Ok(AnswerView {
            answer,
            owner,
            tally,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct TagRow {
    pub id: i64,
    pub name: String,
    pub info: String,
    pub total_questions: i64,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
            info: row.info,
            total_questions: count(row.total_questions),
        })
    }
}

/// Load every tag referenced by `rows` with a single query.
pub(super) async fn tags_for<'e, E>(
    executor: E,
    rows: &[QuestionViewRow],
) -> DomainResult<HashMap<TagId, Tag>>
where
    E: PgExecutor<'e>,
{
    let ids: Vec<i64> = rows
        .iter()
        .flat_map(|row| row.question.tag_ids.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let sql = format!("{TAG_SELECT} WHERE t.id = ANY($1)");
    let tag_rows = sqlx::query_as::<_, TagRow>(&sql)
        .bind(&ids)
        .fetch_all(executor)
        .await
        .map_err(map_sqlx)?;

    tag_rows
        .into_iter()
        .map(|row| Tag::try_from(row).map(|tag| (tag.id, tag)))
        .collect()
}

pub(super) fn kind_str(post: PostRef) -> &'static str {
    post.kind().as_str()
}

pub(super) fn post_ref(kind: &str, id: i64) -> DomainResult<PostRef> {
    PostRef::from_parts(kind.parse::<PostKind>()?, id)
}

pub(super) fn count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}
