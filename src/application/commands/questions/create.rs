use super::QuestionCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, QuestionDto},
        error::ApplicationResult,
    },
    domain::question::{NewQuestion, QuestionBody, QuestionTitle},
};

pub struct CreateQuestionCommand {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl QuestionCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id))]
    pub async fn create_question(
        &self,
        actor: &AuthenticatedUser,
        command: CreateQuestionCommand,
    ) -> ApplicationResult<QuestionDto> {
        let title = QuestionTitle::new(command.title)?;
        let body = QuestionBody::new(command.content)?;
        let tag_names = Self::parse_tags(command.tags)?;

        let tag_ids = self.tag_reconciler.reconcile(&tag_names).await?;

        let created = self
            .write_repo
            .insert(NewQuestion {
                title,
                body,
                owner_id: actor.id,
                tag_ids,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(question = %created.id, tags = created.tag_ids.len(), "question created");
        self.load_view(created.id, actor.id).await
    }
}
