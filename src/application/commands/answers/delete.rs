use super::AnswerCommandService;
use crate::application::commands::ownership::ensure_answer_owner;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::answer::AnswerId,
};

pub struct DeleteAnswerCommand {
    pub id: i64,
}

impl AnswerCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id, answer = command.id))]
    pub async fn delete_answer(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteAnswerCommand,
    ) -> ApplicationResult<AnswerId> {
        let id = AnswerId::new(command.id)?;
        let answer = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("answer not found"))?;

        ensure_answer_owner(actor, &answer)?;

        let report = self.write_repo.delete_cascade(id).await?;
        tracing::info!(comments = report.comments, votes = report.votes, "answer deleted");
        Ok(id)
    }
}
