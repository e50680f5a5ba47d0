use crate::domain::question::QuestionView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{TagDto, UserSummaryDto, VoteDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub owner: UserSummaryDto,
    pub tags: Vec<TagDto>,
    pub votes_count: u64,
    pub score: i64,
    /// The requesting user's vote, present only when a `userId` was given
    /// and that user has voted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<VoteDto>,
    pub answers_count: u64,
    #[serde(default)]
    pub answer_accepted: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<QuestionView> for QuestionDto {
    fn from(view: QuestionView) -> Self {
        let QuestionView {
            question,
            owner,
            tags,
            tally,
            answers_count,
            answer_accepted,
        } = view;
        Self {
            id: question.id.into(),
            title: question.title.into_inner(),
            content: question.body.into_inner(),
            owner: owner.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            votes_count: tally.votes_count,
            score: tally.score,
            vote: tally.viewer_vote.map(Into::into),
            answers_count,
            answer_accepted: answer_accepted.map(Into::into),
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListDto {
    pub questions_count: u64,
    pub questions: Vec<QuestionDto>,
}
