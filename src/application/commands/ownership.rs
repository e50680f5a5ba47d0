// src/application/commands/ownership.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        answer::{Answer, specifications::AnswerOwnerSpec},
        question::{Question, specifications::QuestionOwnerSpec},
    },
};

pub(super) fn ensure_question_owner(
    actor: &AuthenticatedUser,
    question: &Question,
) -> ApplicationResult<()> {
    if QuestionOwnerSpec::new(question, actor.id).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::unauthorized("not authorized"))
    }
}

pub(super) fn ensure_answer_owner(
    actor: &AuthenticatedUser,
    answer: &Answer,
) -> ApplicationResult<()> {
    if AnswerOwnerSpec::new(answer, actor.id).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::unauthorized("not authorized"))
    }
}
