// src/domain/answer/mod.rs
pub mod acceptance;
pub mod entity;
pub mod repository;
pub mod specifications;

pub use crate::domain::ids::AnswerId;
pub use acceptance::{
    ACCEPTANCE_REPUTATION, AcceptancePlan, AcceptancePolicy, AcceptanceState, AcceptanceTransition,
};
pub use entity::{Answer, AnswerBody, AnswerView, NewAnswer};
pub use repository::{AnswerReadRepository, AnswerWriteRepository};
