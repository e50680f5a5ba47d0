// src/application/commands/tags.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::tag::{TagId, TagRepository},
};

const MAX_TAG_INFO_LEN: usize = 2_000;

pub struct UpdateTagInfoCommand {
    pub id: i64,
    pub info: String,
}

pub struct TagCommandService {
    tag_repo: Arc<dyn TagRepository>,
}

impl TagCommandService {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self { tag_repo }
    }

    /// Any signed-in user may edit a tag's description.
    #[tracing::instrument(skip_all, fields(actor = %actor.id, tag = command.id))]
    pub async fn update_info(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTagInfoCommand,
    ) -> ApplicationResult<TagDto> {
        let id = TagId::new(command.id)?;
        let info = command.info.trim().to_owned();
        if info.chars().count() > MAX_TAG_INFO_LEN {
            return Err(ApplicationError::validation(format!(
                "tag description cannot exceed {MAX_TAG_INFO_LEN} characters"
            )));
        }

        self.tag_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let tag = self.tag_repo.update_info(id, info).await?;
        Ok(tag.into())
    }
}
