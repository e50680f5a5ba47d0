use crate::domain::post::PostRef;
use crate::domain::vote::{Vote, VoteTally};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostRefDto {
    /// `question` or `answer`.
    pub kind: String,
    pub id: i64,
}

impl From<PostRef> for PostRefDto {
    fn from(post: PostRef) -> Self {
        Self {
            kind: post.kind().as_str().to_owned(),
            id: post.raw_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteDto {
    pub id: i64,
    pub vote_to: PostRefDto,
    pub voter: i64,
    /// `1` or `-1`.
    pub vote: i64,
}

impl From<Vote> for VoteDto {
    fn from(vote: Vote) -> Self {
        Self {
            id: vote.id.into(),
            vote_to: vote.target.into(),
            voter: vote.voter.into(),
            vote: vote.value.as_i64(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteTallyDto {
    pub votes_count: u64,
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<VoteDto>,
}

impl From<VoteTally> for VoteTallyDto {
    fn from(tally: VoteTally) -> Self {
        Self {
            votes_count: tally.votes_count,
            score: tally.score,
            vote: tally.viewer_vote.map(Into::into),
        }
    }
}
