use super::QuestionQueryService;
use crate::{
    application::{
        dto::QuestionListDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{pagination::PageRequest, tag::TagId},
};

pub struct ListQuestionsByTagQuery {
    pub tag_id: i64,
    pub page: PageRequest,
}

impl QuestionQueryService {
    pub async fn list_questions_by_tag(
        &self,
        query: ListQuestionsByTagQuery,
    ) -> ApplicationResult<QuestionListDto> {
        let tag_id = TagId::new(query.tag_id)?;
        self.tag_repo
            .find_by_id(tag_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let (views, total) = self.read_repo.list_by_tag(tag_id, query.page).await?;
        Ok(QuestionListDto {
            questions_count: total,
            questions: views.into_iter().map(Into::into).collect(),
        })
    }
}
