use crate::domain::ids::UserId;
use crate::domain::question::entity::Question;

/// Only the asker may edit or delete a question, or accept answers to it.
pub struct QuestionOwnerSpec<'a> {
    question: &'a Question,
    user_id: UserId,
}

impl<'a> QuestionOwnerSpec<'a> {
    pub fn new(question: &'a Question, user_id: UserId) -> Self {
        Self { question, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.question.is_owned_by(self.user_id)
    }
}
