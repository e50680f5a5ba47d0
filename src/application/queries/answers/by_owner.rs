use super::AnswerQueryService;
use crate::{
    application::{dto::AnswerDto, error::ApplicationResult},
    domain::{pagination::PageRequest, user::UserId},
};

pub struct ListAnswersByOwnerQuery {
    pub owner_id: i64,
    pub limit: u32,
}

impl AnswerQueryService {
    pub async fn list_answers_by_owner(
        &self,
        query: ListAnswersByOwnerQuery,
    ) -> ApplicationResult<Vec<AnswerDto>> {
        let owner = UserId::new(query.owner_id)?;
        let limit = PageRequest::first(query.limit).limit;
        let views = self.read_repo.list_by_owner(owner, limit).await?;
        Ok(views.into_iter().map(Into::into).collect())
    }
}
