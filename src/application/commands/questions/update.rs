use super::QuestionCommandService;
use crate::application::commands::ownership::ensure_question_owner;
use crate::{
    application::{
        dto::{AuthenticatedUser, QuestionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        question::{QuestionBody, QuestionId, QuestionTitle, QuestionUpdate},
        tag::TagDelta,
    },
};

/// Blank `title`/`content` keep the stored value; `tags: None` keeps the
/// current tags.
pub struct UpdateQuestionCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl QuestionCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id, question = command.id))]
    pub async fn update_question(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateQuestionCommand,
    ) -> ApplicationResult<QuestionDto> {
        let id = QuestionId::new(command.id)?;
        let question = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("question not found"))?;

        ensure_question_owner(actor, &question)?;

        let now = self.clock.now();
        let mut update = QuestionUpdate::new(id, now);

        let title = non_blank(command.title).map(QuestionTitle::new).transpose()?;
        let body = non_blank(command.content).map(QuestionBody::new).transpose()?;
        if title.is_some() || body.is_some() {
            update = update
                .with_title(title.unwrap_or_else(|| question.title.clone()))
                .with_body(body.unwrap_or_else(|| question.body.clone()));
        }

        if let Some(tags) = command.tags {
            let names = Self::parse_tags(tags)?;
            let desired = self.tag_reconciler.reconcile(&names).await?;
            let delta = TagDelta::between(&question.tag_ids, &desired);
            tracing::debug!(
                added = delta.to_add.len(),
                removed = delta.to_remove.len(),
                "question tag delta"
            );
            update = update.with_tags(delta);
        }

        // The response carries aggregates, so it is read back as a view.
        self.write_repo.update(update).await?;
        self.load_view(id, actor.id).await
    }
}
