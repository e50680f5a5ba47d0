use super::AnswerQueryService;
use crate::{
    application::{
        dto::AnswerListDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{pagination::PageRequest, question::QuestionId, user::UserId},
};

pub struct ListAnswersQuery {
    pub question_id: i64,
    pub page: PageRequest,
    pub viewer: Option<i64>,
}

impl AnswerQueryService {
    /// Answers to a question, oldest first. Tallies are computed in the same
    /// query as the page, not per answer.
    pub async fn list_answers(&self, query: ListAnswersQuery) -> ApplicationResult<AnswerListDto> {
        let question_id = QuestionId::new(query.question_id)?;
        let viewer = query.viewer.map(UserId::new).transpose()?;

        self.question_repo
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("question not found"))?;

        let (views, total) = self
            .read_repo
            .list_for_question(question_id, query.page, viewer)
            .await?;

        Ok(AnswerListDto {
            count_answers: total,
            answers: views.into_iter().map(Into::into).collect(),
        })
    }
}
