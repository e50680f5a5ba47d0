// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_answer;
mod postgres_comment;
mod postgres_question;
mod postgres_tag;
mod postgres_user;
mod postgres_vote;
mod rows;

pub use error::map_sqlx;
pub use postgres_answer::{PostgresAnswerReadRepository, PostgresAnswerWriteRepository};
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_question::{PostgresQuestionReadRepository, PostgresQuestionWriteRepository};
pub use postgres_tag::PostgresTagRepository;
pub use postgres_user::PostgresUserRepository;
pub use postgres_vote::PostgresVoteRepository;

use crate::application::services::Repositories;
use sqlx::PgPool;
use std::sync::Arc;

/// Wire every repository port to the same pool.
pub fn postgres_repositories(pool: PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        question_write: Arc::new(PostgresQuestionWriteRepository::new(pool.clone())),
        question_read: Arc::new(PostgresQuestionReadRepository::new(pool.clone())),
        answer_write: Arc::new(PostgresAnswerWriteRepository::new(pool.clone())),
        answer_read: Arc::new(PostgresAnswerReadRepository::new(pool.clone())),
        tags: Arc::new(PostgresTagRepository::new(pool.clone())),
        votes: Arc::new(PostgresVoteRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool)),
    }
}
