use super::AnswerCommandService;
use crate::{
    application::{
        dto::{AnswerDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        answer::{AnswerBody, NewAnswer},
        question::QuestionId,
    },
};

pub struct CreateAnswerCommand {
    pub question_id: i64,
    pub content: String,
}

impl AnswerCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id, question = command.question_id))]
    pub async fn create_answer(
        &self,
        actor: &AuthenticatedUser,
        command: CreateAnswerCommand,
    ) -> ApplicationResult<AnswerDto> {
        let question_id = QuestionId::new(command.question_id)?;
        let body = AnswerBody::new(command.content)?;

        self.question_repo
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("question not found"))?;

        let created = self
            .write_repo
            .insert(NewAnswer {
                question_id,
                owner_id: actor.id,
                body,
                created_at: self.clock.now(),
            })
            .await?;

        self.read_repo
            .find_view(created.id, Some(actor.id))
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::infrastructure("answer vanished after write"))
    }
}
