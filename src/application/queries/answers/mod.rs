// src/application/queries/answers/mod.rs
mod by_owner;
mod get;
mod list;
mod service;

pub use by_owner::ListAnswersByOwnerQuery;
pub use get::GetAnswerQuery;
pub use list::ListAnswersQuery;
pub use service::AnswerQueryService;
