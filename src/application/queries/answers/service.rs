use std::sync::Arc;

use crate::domain::{answer::AnswerReadRepository, question::QuestionReadRepository};

pub struct AnswerQueryService {
    pub(super) read_repo: Arc<dyn AnswerReadRepository>,
    pub(super) question_repo: Arc<dyn QuestionReadRepository>,
}

impl AnswerQueryService {
    pub fn new(
        read_repo: Arc<dyn AnswerReadRepository>,
        question_repo: Arc<dyn QuestionReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            question_repo,
        }
    }
}
