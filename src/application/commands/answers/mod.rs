// src/application/commands/answers/mod.rs
mod accept;
mod create;
mod delete;
mod service;
mod update;

pub use accept::ToggleAcceptCommand;
pub use create::CreateAnswerCommand;
pub use delete::DeleteAnswerCommand;
pub use service::AnswerCommandService;
pub use update::UpdateAnswerCommand;
