// src/application/commands/answers/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        answer::{AcceptancePolicy, AnswerReadRepository, AnswerWriteRepository},
        question::QuestionReadRepository,
        user::UserRepository,
    },
};

pub struct AnswerCommandService {
    pub(super) write_repo: Arc<dyn AnswerWriteRepository>,
    pub(super) read_repo: Arc<dyn AnswerReadRepository>,
    pub(super) question_repo: Arc<dyn QuestionReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) acceptance_policy: AcceptancePolicy,
}

impl AnswerCommandService {
    pub fn new(
        write_repo: Arc<dyn AnswerWriteRepository>,
        read_repo: Arc<dyn AnswerReadRepository>,
        question_repo: Arc<dyn QuestionReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        acceptance_policy: AcceptancePolicy,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            question_repo,
            user_repo,
            clock,
            acceptance_policy,
        }
    }
}
