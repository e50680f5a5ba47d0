// src/application/queries/votes.rs
use std::sync::Arc;

use crate::{
    application::{dto::VoteTallyDto, error::ApplicationResult},
    domain::{
        post::{PostKind, PostRef},
        user::UserId,
        vote::VoteRepository,
    },
};

pub struct GetTallyQuery {
    pub kind: PostKind,
    pub target_id: i64,
    pub viewer: Option<i64>,
}

pub struct VoteQueryService {
    vote_repo: Arc<dyn VoteRepository>,
}

impl VoteQueryService {
    pub fn new(vote_repo: Arc<dyn VoteRepository>) -> Self {
        Self { vote_repo }
    }

    /// Score, vote count and optionally the viewer's vote on one post. A post
    /// nobody voted on (or that does not exist) has an empty tally.
    pub async fn get_tally(&self, query: GetTallyQuery) -> ApplicationResult<VoteTallyDto> {
        let target = PostRef::from_parts(query.kind, query.target_id)?;
        let viewer = query.viewer.map(UserId::new).transpose()?;
        let tally = self.vote_repo.tally(target, viewer).await?;
        Ok(tally.into())
    }
}
