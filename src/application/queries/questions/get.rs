use super::QuestionQueryService;
use crate::{
    application::{
        dto::QuestionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{question::QuestionId, user::UserId},
};

pub struct GetQuestionQuery {
    pub id: i64,
    /// When set, the viewer's own vote is included.
    pub viewer: Option<i64>,
}

impl QuestionQueryService {
    pub async fn get_question(&self, query: GetQuestionQuery) -> ApplicationResult<QuestionDto> {
        let id = QuestionId::new(query.id)?;
        let viewer = query.viewer.map(UserId::new).transpose()?;
        self.read_repo
            .find_view(id, viewer)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("question not found"))
    }
}
