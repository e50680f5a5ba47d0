// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_QUESTION_OWNER: &str = "questions_owner_id_fkey";
const CNT_ANSWER_QUESTION: &str = "answers_question_id_fkey";
const CNT_ANSWER_OWNER: &str = "answers_owner_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_TAG_NAME => DomainError::Conflict("tag already exists".into()),
                    CNT_QUESTION_OWNER | CNT_ANSWER_OWNER => {
                        DomainError::NotFound("owner not found".into())
                    }
                    CNT_ANSWER_QUESTION => DomainError::NotFound("question not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
