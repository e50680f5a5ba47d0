use super::QuestionCommandService;
use crate::application::commands::ownership::ensure_question_owner;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::question::QuestionId,
};

pub struct DeleteQuestionCommand {
    pub id: i64,
}

impl QuestionCommandService {
    /// Removes the question together with its answers, comments and votes.
    #[tracing::instrument(skip_all, fields(actor = %actor.id, question = command.id))]
    pub async fn delete_question(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteQuestionCommand,
    ) -> ApplicationResult<QuestionId> {
        let id = QuestionId::new(command.id)?;
        let question = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("question not found"))?;

        ensure_question_owner(actor, &question)?;

        let report = self.write_repo.delete_cascade(id, self.cascade_policy).await?;
        tracing::info!(
            answers = report.answers,
            comments = report.comments,
            votes = report.votes,
            policy = ?self.cascade_policy,
            "question deleted"
        );
        Ok(id)
    }
}
