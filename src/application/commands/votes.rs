// src/application/commands/votes.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, VoteTallyDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        answer::AnswerReadRepository,
        post::{PostKind, PostRef},
        question::QuestionReadRepository,
        vote::{VoteRepository, VoteValue},
    },
};

pub struct CastVoteCommand {
    pub kind: PostKind,
    pub target_id: i64,
    pub value: i64,
}

pub struct RetractVoteCommand {
    pub kind: PostKind,
    pub target_id: i64,
}

pub struct VoteCommandService {
    vote_repo: Arc<dyn VoteRepository>,
    question_repo: Arc<dyn QuestionReadRepository>,
    answer_repo: Arc<dyn AnswerReadRepository>,
}

impl VoteCommandService {
    pub fn new(
        vote_repo: Arc<dyn VoteRepository>,
        question_repo: Arc<dyn QuestionReadRepository>,
        answer_repo: Arc<dyn AnswerReadRepository>,
    ) -> Self {
        Self {
            vote_repo,
            question_repo,
            answer_repo,
        }
    }

    /// Record the actor's vote, replacing an earlier one on the same post.
    #[tracing::instrument(skip_all, fields(actor = %actor.id))]
    pub async fn cast_vote(
        &self,
        actor: &AuthenticatedUser,
        command: CastVoteCommand,
    ) -> ApplicationResult<VoteTallyDto> {
        let target = PostRef::from_parts(command.kind, command.target_id)?;
        let value = VoteValue::try_from(command.value)?;
        self.ensure_target_exists(target).await?;

        self.vote_repo.upsert(target, actor.id, value).await?;
        let tally = self.vote_repo.tally(target, Some(actor.id)).await?;
        Ok(tally.into())
    }

    #[tracing::instrument(skip_all, fields(actor = %actor.id))]
    pub async fn retract_vote(
        &self,
        actor: &AuthenticatedUser,
        command: RetractVoteCommand,
    ) -> ApplicationResult<VoteTallyDto> {
        let target = PostRef::from_parts(command.kind, command.target_id)?;
        self.ensure_target_exists(target).await?;

        if !self.vote_repo.remove(target, actor.id).await? {
            tracing::debug!(%target, "no vote to retract");
        }
        let tally = self.vote_repo.tally(target, Some(actor.id)).await?;
        Ok(tally.into())
    }

    async fn ensure_target_exists(&self, target: PostRef) -> ApplicationResult<()> {
        let exists = match target {
            PostRef::Question(id) => self.question_repo.find_by_id(id).await?.is_some(),
            PostRef::Answer(id) => self.answer_repo.find_by_id(id).await?.is_some(),
        };
        if exists {
            Ok(())
        } else {
            Err(ApplicationError::not_found(format!("{} not found", target.kind())))
        }
    }
}
