use crate::domain::tag::Tag;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub info_tag: String,
    pub total_questions: u64,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into(),
            info_tag: tag.info,
            total_questions: tag.total_questions,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagListDto {
    pub tags_count: u64,
    pub tags: Vec<TagDto>,
}
