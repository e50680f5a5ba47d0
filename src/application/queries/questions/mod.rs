// src/application/queries/questions/mod.rs
mod by_owner;
mod by_tag;
mod get;
mod list;
mod service;

pub use by_owner::ListQuestionsByOwnerQuery;
pub use by_tag::ListQuestionsByTagQuery;
pub use get::GetQuestionQuery;
pub use list::ListQuestionsQuery;
pub use service::QuestionQueryService;
