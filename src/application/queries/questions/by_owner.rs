use super::QuestionQueryService;
use crate::{
    application::{dto::QuestionDto, error::ApplicationResult},
    domain::{pagination::PageRequest, user::UserId},
};

pub struct ListQuestionsByOwnerQuery {
    pub owner_id: i64,
    pub limit: u32,
}

impl QuestionQueryService {
    /// Most recent questions asked by one user, for profile pages.
    pub async fn list_questions_by_owner(
        &self,
        query: ListQuestionsByOwnerQuery,
    ) -> ApplicationResult<Vec<QuestionDto>> {
        let owner = UserId::new(query.owner_id)?;
        let limit = PageRequest::first(query.limit).limit;
        let views = self.read_repo.list_by_owner(owner, limit).await?;
        Ok(views.into_iter().map(Into::into).collect())
    }
}
