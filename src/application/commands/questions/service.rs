// src/application/commands/questions/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::QuestionDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        ids::UserId,
        post::CascadePolicy,
        question::{QuestionId, QuestionReadRepository, QuestionWriteRepository},
        tag::{TagName, TagReconciler},
    },
};

pub struct QuestionCommandService {
    pub(super) write_repo: Arc<dyn QuestionWriteRepository>,
    pub(super) read_repo: Arc<dyn QuestionReadRepository>,
    pub(super) tag_reconciler: Arc<TagReconciler>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) cascade_policy: CascadePolicy,
}

impl QuestionCommandService {
    pub fn new(
        write_repo: Arc<dyn QuestionWriteRepository>,
        read_repo: Arc<dyn QuestionReadRepository>,
        tag_reconciler: Arc<TagReconciler>,
        clock: Arc<dyn Clock>,
        cascade_policy: CascadePolicy,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            tag_reconciler,
            clock,
            cascade_policy,
        }
    }

    pub(super) fn parse_tags(tags: Vec<String>) -> ApplicationResult<Vec<TagName>> {
        tags.into_iter()
            .map(TagName::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// Re-read a question through the joined view after a write.
    pub(super) async fn load_view(
        &self,
        id: QuestionId,
        viewer: UserId,
    ) -> ApplicationResult<QuestionDto> {
        self.read_repo
            .find_view(id, Some(viewer))
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::infrastructure("question vanished after write"))
    }
}
