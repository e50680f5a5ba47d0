use crate::domain::answer::AnswerView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{UserSummaryDto, VoteDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDto {
    pub id: i64,
    pub content: String,
    pub question: i64,
    pub owner: UserSummaryDto,
    pub accepted: bool,
    pub votes_count: u64,
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<VoteDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<AnswerView> for AnswerDto {
    fn from(view: AnswerView) -> Self {
        let AnswerView {
            answer,
            owner,
            tally,
        } = view;
        Self {
            id: answer.id.into(),
            content: answer.body.into_inner(),
            question: answer.question_id.into(),
            owner: owner.into(),
            accepted: answer.accepted,
            votes_count: tally.votes_count,
            score: tally.score,
            vote: tally.viewer_vote.map(Into::into),
            created_at: answer.created_at,
            updated_at: answer.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerListDto {
    pub count_answers: u64,
    pub answers: Vec<AnswerDto>,
}
