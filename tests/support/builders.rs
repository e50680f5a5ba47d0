// tests/support/builders.rs
use overflow_core::application::commands::answers::CreateAnswerCommand;
use overflow_core::application::commands::questions::CreateQuestionCommand;
use overflow_core::application::dto::{AnswerDto, QuestionDto};
use overflow_core::domain::user::User;

use super::helpers::{TestApp, actor};

pub struct QuestionBuilder {
    title: String,
    content: String,
    tags: Vec<String>,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        Self {
            title: "How do I borrow twice?".into(),
            content: "The checker rejects my second &mut.".into(),
            tags: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub async fn create(self, app: &TestApp, owner: &User) -> QuestionDto {
        app.services
            .question_commands
            .create_question(
                &actor(owner),
                CreateQuestionCommand {
                    title: self.title,
                    content: self.content,
                    tags: self.tags,
                },
            )
            .await
            .expect("create question")
    }
}

pub async fn create_answer(app: &TestApp, owner: &User, question_id: i64, content: &str) -> AnswerDto {
    app.services
        .answer_commands
        .create_answer(
            &actor(owner),
            CreateAnswerCommand {
                question_id,
                content: content.into(),
            },
        )
        .await
        .expect("create answer")
}
