use super::QuestionQueryService;
use crate::{
    application::{dto::QuestionListDto, error::ApplicationResult},
    domain::pagination::PageRequest,
};

pub struct ListQuestionsQuery {
    pub page: PageRequest,
}

impl QuestionQueryService {
    /// Newest questions first, each annotated with its vote tally.
    pub async fn list_questions(
        &self,
        query: ListQuestionsQuery,
    ) -> ApplicationResult<QuestionListDto> {
        let (views, total) = self.read_repo.list(query.page).await?;
        Ok(QuestionListDto {
            questions_count: total,
            questions: views.into_iter().map(Into::into).collect(),
        })
    }
}
