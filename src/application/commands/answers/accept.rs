use super::AnswerCommandService;
use crate::application::commands::ownership::ensure_question_owner;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::answer::{AcceptanceState, AnswerId},
};

pub struct ToggleAcceptCommand {
    pub id: i64,
}

impl AnswerCommandService {
    /// Flip the answer between accepted and unaccepted and move the answer
    /// author's reputation accordingly. Only the asker of the parent
    /// question may do this.
    #[tracing::instrument(skip_all, fields(actor = %actor.id, answer = command.id))]
    pub async fn toggle_accept(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleAcceptCommand,
    ) -> ApplicationResult<AcceptanceState> {
        let id = AnswerId::new(command.id)?;
        let answer = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("answer not found"))?;

        self.user_repo
            .find_by_id(answer.owner_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("answer owner not found"))?;

        let question = self
            .question_repo
            .find_by_id(answer.question_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("question not found"))?;

        ensure_question_owner(actor, &question)?;

        let plan = self
            .write_repo
            .toggle_acceptance(id, self.acceptance_policy)
            .await?;

        tracing::info!(
            state = ?plan.target.to,
            reputation_delta = plan.target.reputation_delta,
            revoked = plan.revoked.len(),
            "answer acceptance toggled"
        );
        Ok(plan.target.to)
    }
}
