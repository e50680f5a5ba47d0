use super::AnswerQueryService;
use crate::{
    application::{
        dto::AnswerDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{answer::AnswerId, user::UserId},
};

pub struct GetAnswerQuery {
    pub id: i64,
    pub viewer: Option<i64>,
}

impl AnswerQueryService {
    pub async fn get_answer(&self, query: GetAnswerQuery) -> ApplicationResult<AnswerDto> {
        let id = AnswerId::new(query.id)?;
        let viewer = query.viewer.map(UserId::new).transpose()?;
        self.read_repo
            .find_view(id, viewer)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("answer not found"))
    }
}
