// src/application/commands/questions/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateQuestionCommand;
pub use delete::DeleteQuestionCommand;
pub use service::QuestionCommandService;
pub use update::UpdateQuestionCommand;
