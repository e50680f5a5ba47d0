use super::AnswerCommandService;
use crate::application::commands::ownership::ensure_answer_owner;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::answer::{AnswerBody, AnswerId},
};

/// A blank or missing `content` leaves the answer as it is.
pub struct UpdateAnswerCommand {
    pub id: i64,
    pub content: Option<String>,
}

impl AnswerCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id, answer = command.id))]
    pub async fn update_answer(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateAnswerCommand,
    ) -> ApplicationResult<()> {
        let id = AnswerId::new(command.id)?;
        let mut answer = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("answer not found"))?;

        ensure_answer_owner(actor, &answer)?;

        let Some(content) = command.content.filter(|c| !c.trim().is_empty()) else {
            return Ok(());
        };

        answer.set_body(AnswerBody::new(content)?, self.clock.now());
        self.write_repo
            .update_body(id, answer.body, answer.updated_at)
            .await?;
        Ok(())
    }
}
