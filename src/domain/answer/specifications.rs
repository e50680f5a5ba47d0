use crate::domain::answer::entity::Answer;
use crate::domain::ids::UserId;

/// Only the author of an answer may edit or delete it.
pub struct AnswerOwnerSpec<'a> {
    answer: &'a Answer,
    user_id: UserId,
}

impl<'a> AnswerOwnerSpec<'a> {
    pub fn new(answer: &'a Answer, user_id: UserId) -> Self {
        Self { answer, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.answer.is_owned_by(self.user_id)
    }
}
